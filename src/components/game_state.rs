// src/components/game_state.rs

// serde を使う宣言！ゲーム状態もスナップショットに載せるからね！
use serde::{Serialize, Deserialize};

/// ゲーム全体の現在の状態を表す列挙型だよ！
///
/// ゲームがまだプレイ中なのか、それとも勝って終わったのか、を示すのに使うよ！🏆
/// 「負け」はここには無いよ。スコアが尽きたかどうかは外のスコア係が勝手に判断することで、
/// ルールエンジン的には最後までプレイ中のままなんだ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// ゲームが進行中の状態
    Playing,
    /// 勝利！🏆 4つの組札が全部13枚になった状態。
    Won,
}
