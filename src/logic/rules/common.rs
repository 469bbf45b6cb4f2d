//! ルール判定で共通して使うヘルパー関数や型を置くよ。

use crate::components::card::{Card, Suit};
use itertools::Itertools;

/// カードの色（赤か黒か）を表すヘルパーenumだよ。
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CardColor {
    Red,
    Black,
}

impl CardColor {
    /// スートからカードの色を取得する関数。
    pub fn from_suit(suit: Suit) -> Self {
        match suit {
            Suit::Heart | Suit::Diamond => CardColor::Red,
            Suit::Club | Suit::Spade => CardColor::Black,
        }
    }

    /// カードから直接色を取る版。いちいち .suit って書かなくていいように！
    pub fn from_card(card: &Card) -> Self {
        Self::from_suit(card.suit)
    }
}

/// 束が「交互の色で降順」になっているかチェックするよ。
/// 場札に置かれた時点で1枚ずつ検証済みだから、エンジンが移動のたびに呼ぶことはないけど、
/// テストとデバッグアサートで不変条件を確かめるのに使うんだ。
pub fn is_descending_alternating(run: &[Card]) -> bool {
    // tuple_windows で隣り合うペアを順番に見ていくよ。1枚以下なら文句なしで OK！
    run.iter().tuple_windows().all(|(upper, lower)| {
        CardColor::from_card(upper) != CardColor::from_card(lower)
            && (lower.rank as usize) + 1 == (upper.rank as usize)
    })
}
