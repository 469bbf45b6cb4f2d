//! 場札 (Tableau) へのカード移動ルールを定義するよ。

use crate::components::card::{Card, Rank};
use crate::components::pile::Pile;
// 共通ヘルパーを使うためにインポート
use super::common::CardColor;
use log::debug;

/// 持ち上げた束が、特定の場札 (Tableau) の一番上に置けるかチェックする。
///
/// 判定の主役は束の「一番下」のカードだよ。束の中身は置かれた時に検証済みだから、
/// ここでは見ない (差分で守る不変条件ってやつ！)。
/// - 場札が空: 一番下がキングなら OK。
/// - 場札にカードあり: 色が違っていて、ランクがちょうど1つ下なら OK。
pub fn can_move_to_tableau(run: &[Card], tableau: &Pile) -> bool {
    let Some(bottom) = run.first() else {
        return false; // 空の束はそもそも移動じゃない！
    };

    match tableau.top_card() {
        Some(top) => {
            let move_color = CardColor::from_card(bottom);
            let target_color = CardColor::from_card(top);

            let colors_different = move_color != target_color;
            let rank_is_one_less = (bottom.rank as usize) + 1 == (top.rank as usize);

            debug!(
                "[Tableau Rule] {} ({:?}) onto {} ({:?}): colors different {}, rank one less {}",
                bottom, move_color, top, target_color, colors_different, rank_is_one_less
            );

            colors_different && rank_is_one_less
        }
        None => {
            let is_king = bottom.rank == Rank::King;
            debug!("[Tableau Rule] {} onto empty tableau: is king {}", bottom, is_king);
            is_king
        }
    }
}
