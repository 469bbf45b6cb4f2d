// src/logic/deck.rs

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};
use itertools::Itertools;
use rand::{seq::SliceRandom, Rng};
use serde::{Serialize, Deserialize};

/// ゲーム開始時に選ぶシャッフルの方式だよ。🎲
///
/// 元々「レベル」として選ばせていた2種類をそのまま持ってきたよ:
/// - `FisherYates`: ちゃんと一様なシャッフル。`rand` の `shuffle` がまさにこれ！
/// - `Naive`: 各位置をランダムな相手と交換していく素朴なやつ。厳密には一様じゃないけど、
///   52枚を混ぜるには十分バラバラになるよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShufflePolicy {
    FisherYates,
    Naive,
}

/// 標準的な52枚のカードデッキ（ソリティア用）を生成する関数だよ！🃏
///
/// 返り値は `Vec<Card>` で、カードはスートとランクの組み合わせで全種類作られるよ。
/// 生成された時点では、すべてのカードは裏向き (`is_face_up: false`) になってる！
pub fn create_standard_deck() -> Vec<Card> {
    // itertools の cartesian_product で スート × ランク の全組み合わせ！スッキリ！✨
    ALL_SUITS
        .iter()
        .cartesian_product(ALL_RANKS.iter())
        .map(|(&suit, &rank)| Card::new(suit, rank))
        .collect()
}

/// カードデッキをシャッフルする関数だよ。
///
/// # 引数
/// * `deck` - シャッフルしたいカードデッキへの可変参照。
/// * `policy` - どっちの方式で混ぜるか。
/// * `rng` - 乱数生成器。テストでは種を固定したものを渡せるよ！
pub fn shuffle_deck(deck: &mut [Card], policy: ShufflePolicy, rng: &mut impl Rng) {
    match policy {
        ShufflePolicy::FisherYates => {
            deck.shuffle(rng); // これで一様なシャッフル完了！
        }
        ShufflePolicy::Naive => {
            // 各位置を、デッキ全体から選んだランダムな位置と交換していくよ。
            for i in 0..deck.len() {
                let j = rng.gen_range(0..deck.len());
                deck.swap(i, j);
            }
        }
    }
}
