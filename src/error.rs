// src/error.rs
//! エンジンのエラー型を定義するよ。
//!
//! とはいえ、このエンジンで「本物のエラー」になるのはカード生成の失敗だけ！
//! 不正な移動 (IllegalMove) は bool の却下結果、範囲外の添字は None / 空 Vec で返す方針だから、
//! ここには載せないよ。どの失敗もプロセスを殺さない、ローカルに回復できるものだけ。

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// スートやランクのトークンが不正だった時のエラー。
    /// 固定の52枚生成パスでは絶対に起きないけど、外から文字列でカードを作る時のためにね！
    #[error("invalid card spec: unrecognized token `{token}`")]
    InvalidCardSpec { token: String },
}
