// src/config/mod.rs

// 盤面のレイアウト定数を置くモジュールだよ！
pub mod layout;
