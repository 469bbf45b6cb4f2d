// src/logic/mod.rs

// ゲームの純粋なロジックを置くモジュールだよ！
// デッキの生成とシャッフル、そして移動の可否を決めるルールたち。
pub mod deck;
pub mod rules;
