// src/components/pile.rs

// serde を使うためにインポート！Serialize と Deserialize トレイトを使うよ。
use serde::{Serialize, Deserialize};

use crate::components::card::Card;
use crate::components::position::Position;
use crate::config::layout::{CARD_HEIGHT, CARD_WIDTH, TABLEAU_FAN_OFFSET};

/// パイルの種類を示す Enum だよ。
/// これを使って、カードの束が場札なのか組札なのか山札なのか、を区別するよ。
/// 種類ごとにクリック判定のしかたが変わるんだ (場札は縦に広がる、組札は一番上だけ、とか)。
///
/// Clone, Copy: 値を簡単に複製できるようにする。
/// Debug: println! などで中身をデバッグ表示できるようにする。
/// PartialEq, Eq: == 演算子で比較できるようにする。
/// Serialize, Deserialize: この Enum を JSON 形式に変換したり、JSON から戻したりできるようにする！✨
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PileKind {
    /// 場札 (Tableau) だよ。7つの列があるので、列番号 (0-6) を持つ。
    Tableau(u8),
    /// 組札 (Foundation) だよ。スートごとに4つあるので、番号 (0-3) を持つ。
    /// どのスートが積まれるかは固定じゃなくて、最初に置かれたエースで決まるよ。
    Foundation(u8),
    /// 山札 (Stock) だよ。プレイヤーがカードを引く元の場所。
    Stock,
    /// 山札からめくったカードを置く場所 (Waste) だよ。常に表向き、一番上だけ触れる。
    Waste,
    /// 移動中のカードの束を示すタグ。永続状態には絶対に現れない！
    /// 実際の移動は所有権つきの Vec<Card> で運ぶから、これはスナップショット表示用だよ。
    TransientRun,
}

/// カードの束そのものを表す構造体だよ。
/// 下が index 0、一番上が最後の要素。並び順がそのままゲームの状態！
///
/// 不変条件 (ルールエンジンが差分で守るもの。毎回の全チェックはしない):
/// - Foundation: 下から A, 2, 3... と単調増加で、スートは最初の1枚から変わらない。
/// - Tableau: 表向きのカードは一番上の連続した部分だけ。その下は全部裏向き。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pile {
    /// このパイルの種類。
    pub kind: PileKind,
    /// パイルのアンカー位置。ゲーム開始時に決まって、その後は変わらない。
    pub origin: Position,
    cards: Vec<Card>,
}

impl Pile {
    /// 空のパイルを作るよ。
    pub fn new(kind: PileKind, origin: Position) -> Self {
        Self { kind, origin, cards: Vec::new() }
    }

    /// 中身入りのパイルを作るヘルパー。初期配置とテストで使うよ。
    pub fn with_cards(kind: PileKind, origin: Position, cards: Vec<Card>) -> Self {
        Self { kind, origin, cards }
    }

    /// 一番上のカード (最後の要素) を見るよ。空なら None。
    pub fn top_card(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// 一番下のカード (最初の要素) を見るよ。
    /// 移動中の束の「一番下」がルール判定の主役だから、これ大事！
    pub fn bottom_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// index 番目のカードを見るよ。範囲外なら None (パニックしない！)。
    pub fn card_at(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// カードを1枚一番上に積むよ。
    /// 表裏は触らない！めくるかどうかは呼び出し側 (ルールエンジン) が決めることだからね。
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// カードの束をまとめて一番上に積むよ。束の中の並び順はそのまま！
    pub fn push_run(&mut self, run: Vec<Card>) {
        self.cards.extend(run);
    }

    /// index から一番上までのカードをひとかたまりで取り出すよ。
    /// 束を持ち上げる時の操作！取り出した分はこのパイルから消える。
    /// 範囲外なら何もしないで空の Vec を返すよ。
    pub fn extract_run_from(&mut self, index: usize) -> Vec<Card> {
        if index >= self.cards.len() {
            return Vec::new();
        }
        self.cards.split_off(index)
    }

    /// 一番上のカードを1枚取り出すよ。山札から引く時に使う。
    pub fn pop_top(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// 全カードを取り出してこのパイルを空にするよ。リサイクル用！
    pub fn take_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// 中身を順番どおりに見るよ (読み取り専用)。
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// 一番上のカードが裏向きだったら表にめくるよ。
    /// 実際にめくれた時だけ、そのカードのコピーを返す。もう表だったら None！
    /// 場札から束を持っていった後に、下から出てきたカードを公開するのはこれの仕事。
    pub fn turn_top_card_up(&mut self) -> Option<Card> {
        match self.cards.last_mut() {
            Some(card) if !card.is_face_up => {
                card.is_face_up = true;
                Some(card.clone())
            }
            _ => None,
        }
    }

    /// 全カードを表向きにするよ (捨て札用)。
    pub fn turn_all_cards_up(&mut self) {
        for card in &mut self.cards {
            card.is_face_up = true;
        }
    }

    /// 全カードを裏向きにするよ (山札に戻す時用)。
    pub fn turn_all_cards_down(&mut self) {
        for card in &mut self.cards {
            card.is_face_up = false;
        }
    }

    /// クリックされた点がこのパイルのどのカードに当たるかを返すよ。
    /// 種類ごとに判定が違うのがポイント！
    /// - Stock: 一番上の1枚ぶんの矩形。空でもクリックできる (リサイクルのため)。
    /// - Foundation: 一番上の1枚。空でも枠に当たれば index 0 (エースの置き先になるから！)。
    /// - Waste: 一番上の1枚だけ。空なら当たらない。
    /// - Tableau: 表向きのカードだけが対象。一番上はカード全体、その下は見えてる帯の部分。
    ///   空の場合はパイルの枠そのものに当たれば index 0。
    /// - TransientRun: 盤面にいないから絶対に当たらない。
    pub fn hit_test(&self, point: Position) -> Option<usize> {
        if point.x < self.origin.x || point.x > self.origin.x + CARD_WIDTH {
            return None;
        }
        match self.kind {
            PileKind::Stock => {
                let in_body = point.y >= self.origin.y && point.y <= self.origin.y + CARD_HEIGHT;
                in_body.then(|| self.cards.len().saturating_sub(1))
            }
            PileKind::Foundation(_) => {
                let in_body = point.y >= self.origin.y && point.y <= self.origin.y + CARD_HEIGHT;
                in_body.then(|| self.cards.len().saturating_sub(1))
            }
            PileKind::Waste => {
                if self.cards.is_empty() {
                    return None;
                }
                let in_body = point.y >= self.origin.y && point.y <= self.origin.y + CARD_HEIGHT;
                in_body.then(|| self.cards.len() - 1)
            }
            PileKind::TransientRun => None,
            PileKind::Tableau(_) => {
                if self.cards.is_empty() {
                    let in_body = point.y >= self.origin.y && point.y <= self.origin.y + CARD_HEIGHT;
                    return in_body.then_some(0);
                }
                // 一番上以外のカードは、次のカードに隠されてない帯の部分だけ。裏向きは触れない！
                for i in 0..self.cards.len() - 1 {
                    let band_top = self.origin.y + i as f32 * TABLEAU_FAN_OFFSET;
                    if point.y >= band_top
                        && point.y < band_top + TABLEAU_FAN_OFFSET
                        && self.cards[i].is_face_up
                    {
                        return Some(i);
                    }
                }
                // 一番上のカードはカード1枚ぶんまるごと。
                let top_index = self.cards.len() - 1;
                let top_y = self.origin.y + top_index as f32 * TABLEAU_FAN_OFFSET;
                if point.y >= top_y
                    && point.y <= top_y + CARD_HEIGHT
                    && self.cards[top_index].is_face_up
                {
                    return Some(top_index);
                }
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Card, Rank, Suit};

    // テスト用のカードを作るヘルパーだよ。
    fn card(suit: Suit, rank: Rank, face_up: bool) -> Card {
        Card { suit, rank, is_face_up: face_up }
    }

    fn anchor() -> Position {
        Position::new(0.0, 0.0)
    }

    #[test]
    fn top_and_bottom() {
        let mut pile = Pile::new(PileKind::Tableau(0), anchor());
        assert!(pile.top_card().is_none(), "空のパイルに一番上はないはず");
        assert!(pile.bottom_card().is_none());

        pile.push(card(Suit::Spade, Rank::Seven, true));
        pile.push(card(Suit::Heart, Rank::Six, true));

        assert_eq!(pile.bottom_card().unwrap().rank, Rank::Seven, "一番下は最初に積んだカード");
        assert_eq!(pile.top_card().unwrap().rank, Rank::Six, "一番上は最後に積んだカード");
        assert_eq!(pile.len(), 2);
    }

    #[test]
    fn extract_run_out_of_bounds_is_noop() {
        let mut pile = Pile::with_cards(
            PileKind::Tableau(2),
            anchor(),
            vec![card(Suit::Club, Rank::Nine, true)],
        );
        // 範囲外は空の Vec が返って、パイルは無傷のはず！
        let run = pile.extract_run_from(5);
        assert!(run.is_empty(), "範囲外の取り出しは空のはず");
        assert_eq!(pile.len(), 1, "パイルの中身は変わらないはず");
    }

    #[test]
    fn extract_and_restore_preserves_order() {
        // 黒7・赤6・黒5 の束を取り出して、そのまま戻すと元どおりになるか確認！
        let original = vec![
            card(Suit::Spade, Rank::Seven, true),
            card(Suit::Heart, Rank::Six, true),
            card(Suit::Club, Rank::Five, true),
        ];
        let mut pile = Pile::with_cards(PileKind::Tableau(0), anchor(), original.clone());

        let run = pile.extract_run_from(0);
        assert_eq!(run.len(), 3);
        assert!(pile.is_empty());

        pile.push_run(run);
        assert_eq!(pile.cards(), &original[..], "戻した後は並びも含めて元どおりのはず");
    }

    #[test]
    fn turn_top_card_up_flips_exactly_once() {
        let mut pile = Pile::with_cards(
            PileKind::Tableau(1),
            anchor(),
            vec![card(Suit::Diamond, Rank::Queen, false)],
        );

        // 1回目: 裏→表にめくれて、カードが返ってくる
        let flipped = pile.turn_top_card_up();
        assert!(flipped.is_some(), "裏向きならめくれるはず");
        assert!(pile.top_card().unwrap().is_face_up);

        // 2回目: もう表だから何も起きない
        assert!(pile.turn_top_card_up().is_none(), "もう表向きだから None のはず");

        // 空のパイルでも何も起きない
        let mut empty = Pile::new(PileKind::Tableau(3), anchor());
        assert!(empty.turn_top_card_up().is_none());
    }

    #[test]
    fn turn_all_cards() {
        let mut pile = Pile::with_cards(
            PileKind::Waste,
            anchor(),
            vec![card(Suit::Spade, Rank::Two, false), card(Suit::Heart, Rank::Nine, true)],
        );

        pile.turn_all_cards_up();
        assert!(pile.cards().iter().all(|c| c.is_face_up), "全部表向きになるはず");

        pile.turn_all_cards_down();
        assert!(pile.cards().iter().all(|c| !c.is_face_up), "全部裏向きになるはず");
    }

    #[test]
    fn tableau_hit_test_bands() {
        // 裏・裏・表・表 の4枚の場札で、どこをクリックしたら何番になるか確認するよ！
        let mut pile = Pile::with_cards(
            PileKind::Tableau(0),
            anchor(),
            vec![
                card(Suit::Spade, Rank::King, false),
                card(Suit::Heart, Rank::Ten, false),
                card(Suit::Club, Rank::Eight, true),
                card(Suit::Diamond, Rank::Seven, true),
            ],
        );

        // 裏向きカードの帯 (index 0, 1) はどこを突いても当たらない
        assert_eq!(pile.hit_test(Position::new(10.0, 5.0)), None, "裏向きは触れないはず");
        assert_eq!(pile.hit_test(Position::new(10.0, TABLEAU_FAN_OFFSET + 5.0)), None);

        // index 2 (表向き・上に1枚乗ってる) は帯の部分だけ
        let band2_y = 2.0 * TABLEAU_FAN_OFFSET + 5.0;
        assert_eq!(pile.hit_test(Position::new(10.0, band2_y)), Some(2));

        // 一番上 (index 3) はカード1枚ぶんまるごと
        let top_y = 3.0 * TABLEAU_FAN_OFFSET + CARD_HEIGHT - 5.0;
        assert_eq!(pile.hit_test(Position::new(10.0, top_y)), Some(3));

        // 横にはみ出したら当たらない
        assert_eq!(pile.hit_test(Position::new(CARD_WIDTH + 1.0, band2_y)), None);

        // 空の場札は枠に当たれば index 0 (キングを置く先として選べるように！)
        let empty = Pile::new(PileKind::Tableau(6), anchor());
        assert_eq!(empty.hit_test(Position::new(10.0, 50.0)), Some(0));
        assert_eq!(empty.hit_test(Position::new(10.0, CARD_HEIGHT + 50.0)), None);

        // 束を抜いた後も判定が崩れないか一応見ておく
        let _ = pile.extract_run_from(2);
        assert_eq!(pile.hit_test(Position::new(10.0, band2_y)), None, "抜いた後の裏向きトップは触れない");
    }

    #[test]
    fn stock_and_foundation_hit_test() {
        // 山札は空でもクリックできる (リサイクルのトリガーになるから！)
        let empty_stock = Pile::new(PileKind::Stock, anchor());
        assert_eq!(empty_stock.hit_test(Position::new(10.0, 10.0)), Some(0));

        // 組札は空でも枠に当たれば index 0 (エースをドロップする先として選べるように！)
        let mut foundation = Pile::new(PileKind::Foundation(0), anchor());
        assert_eq!(foundation.hit_test(Position::new(10.0, 10.0)), Some(0), "空の組札も当たるはず");
        assert_eq!(foundation.hit_test(Position::new(10.0, CARD_HEIGHT + 10.0)), None, "枠の外は当たらない");
        foundation.push(card(Suit::Heart, Rank::Ace, true));
        foundation.push(card(Suit::Heart, Rank::Two, true));
        assert_eq!(foundation.hit_test(Position::new(10.0, 10.0)), Some(1), "当たるのは一番上だけ");

        // 捨て札は空なら当たらない (ドロップ先にも持ち上げ元にもならないから)
        let empty_waste = Pile::new(PileKind::Waste, anchor());
        assert_eq!(empty_waste.hit_test(Position::new(10.0, 10.0)), None, "空の捨て札は当たらないはず");
    }
}
