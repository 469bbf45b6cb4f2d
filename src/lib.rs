// src/lib.rs

// クロンダイク・ソリティアのルールエンジン本体だよ！🃏✨
// このクレートは「カードがどこへ動けるか」「いま勝ってるか」だけを知っていて、
// 描画も入力デバイスも知らない。外の世界 (UIレイヤー) は座標を `resolve_hit` で
// パイルに変換して、`on_move_attempt` / `on_stock_click` を呼ぶだけでOK！

pub mod components;
pub mod config;
pub mod error;
pub mod game;
pub mod logic;
pub mod snapshot;

// よく使う型はクレート直下からも使えるように再エクスポート！
pub use components::card::{Card, Rank, Suit};
pub use components::game_state::GameStatus;
pub use components::pile::{Pile, PileKind};
pub use components::position::Position;
pub use error::EngineError;
pub use game::{Game, GameEvent, MoveOutcome, PileId, StockAction, StockOutcome};
pub use logic::deck::ShufflePolicy;
pub use snapshot::GameSnapshot;
