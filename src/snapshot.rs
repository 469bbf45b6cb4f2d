// src/snapshot.rs

// このファイルは、エンジンから描画層に渡す「読み取り専用のゲーム状態」を定義するよ！💌
// エンジンの中身 (パイルの所有権とか) を外に貸し出すんじゃなくて、
// 全パイルの中身と向きをまるごとコピーした値を渡すんだ。
// データ構造を JSON にしたり戻したりできるように `serde` クレートを使うよ。
// `Serialize` は Rust のデータ構造 -> JSON 文字列 にするやつ、
// `Deserialize` は JSON 文字列 -> Rust のデータ構造 にするやつだよ。
use serde::{Serialize, Deserialize};

use crate::components::game_state::GameStatus;
use crate::components::pile::Pile;

/// ある瞬間のゲーム状態まるごと！描画層はこれだけ見てカードを描けばOK。
///
/// パイルの並び・各カードの表裏・アンカー座標が全部入ってる。
/// エンジンへの書き戻しはできないよ。変更したければ `Game` の
/// `on_move_attempt` / `on_stock_click` を通ってね！
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    /// 7つの場札。index がそのまま列番号。
    pub tableaus: Vec<Pile>,
    /// 4つの組札。
    pub foundations: Vec<Pile>,
    /// 山札。中身は全部裏向きのはず。
    pub stock: Pile,
    /// 捨て札。中身は全部表向きのはず。
    pub waste: Pile,
    /// プレイ中か勝利か。
    pub status: GameStatus,
}

impl GameSnapshot {
    /// 盤面にある全カードの枚数。保存則 (常に52枚) のチェックに便利！
    pub fn total_cards(&self) -> usize {
        self.tableaus.iter().map(Pile::len).sum::<usize>()
            + self.foundations.iter().map(Pile::len).sum::<usize>()
            + self.stock.len()
            + self.waste.len()
    }
}
