// src/components/mod.rs

// この components モジュールに属するサブモジュールを宣言するよ！
pub mod card;
pub mod pile; // カードの束！場札・組札・山札・捨て札はぜんぶこれ！🃏
pub mod position; // 位置情報！📍
pub mod game_state; // プレイ中か勝利か！🏆

// 他のコンポーネントファイルも必要になったらここに追加していくよ。整理整頓！🧹✨
