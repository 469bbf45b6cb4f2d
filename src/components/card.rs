// src/components/card.rs

// serde を使う宣言！カード情報をスナップショットに載せて描画層に渡す時に使うよ！
use serde::{Serialize, Deserialize};
use std::fmt;

// トークンからの生成に失敗した時のエラー型！
use crate::error::EngineError;

/// カードのスート（マーク）を表す列挙型だよ！❤️♦️♣️♠️
///
/// #[derive(...)] のおまじないも忘れずに！
/// - Debug: デバッグ表示用 (`println!("{:?}", suit);`)
/// - Clone, Copy: 簡単にコピーできるように
/// - PartialEq, Eq: 等しいか比較できるように (`==`)
/// - Hash: HashMap のキーとかで使えるように
/// - Serialize, Deserialize: JSON などに変換できるように
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Heart,   // ❤️
    Diamond, // ♦️
    Club,    // ♣️
    Spade,   // ♠️
}

/// 全スートを並べた配列。デッキ生成のループで使うよ！
pub const ALL_SUITS: [Suit; 4] = [Suit::Heart, Suit::Diamond, Suit::Club, Suit::Spade];

impl Suit {
    /// 1文字トークン ("S", "H", "D", "C") からスートを作るよ。
    /// 知らないトークンだったら `InvalidCardSpec` エラー！
    pub fn from_token(token: &str) -> Result<Self, EngineError> {
        match token {
            "S" => Ok(Suit::Spade),
            "H" => Ok(Suit::Heart),
            "D" => Ok(Suit::Diamond),
            "C" => Ok(Suit::Club),
            _ => Err(EngineError::InvalidCardSpec { token: token.to_string() }),
        }
    }

    /// スートを1文字トークンに戻すよ。`from_token` の逆！
    pub fn token(&self) -> &'static str {
        match self {
            Suit::Spade => "S",
            Suit::Heart => "H",
            Suit::Diamond => "D",
            Suit::Club => "C",
        }
    }
}

/// カードのランク（数字）を表す列挙型だよ！ A, 2, 3, ..., K
///
/// スートと同じように #[derive(...)] を付けておくよ！
/// PartialOrd, Ord も追加して、ランクの大小比較 (`<`, `>`) もできるようにしておこう！
/// 組札・場札の連番チェックで使いまくるからね！👍
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1, // A は 1 として扱うよ (ルールは全部「隣のランクか」の相対比較だから、基準がどこでもOK！)
    Two,     // 2
    Three,   // 3
    Four,    // 4
    Five,    // 5
    Six,     // 6
    Seven,   // 7
    Eight,   // 8
    Nine,    // 9
    Ten,     // 10
    Jack,    // J (11 扱い)
    Queen,   // Q (12 扱い)
    King,    // K (13 扱い)
}

/// 全ランクを A から K の順に並べた配列。これもデッキ生成用！
pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six, Rank::Seven,
    Rank::Eight, Rank::Nine, Rank::Ten, Rank::Jack, Rank::Queen, Rank::King,
];

impl Rank {
    /// トークン ("A", "2" ... "10", "J", "Q", "K") からランクを作るよ。
    /// こっちも知らないトークンなら `InvalidCardSpec` エラー！
    pub fn from_token(token: &str) -> Result<Self, EngineError> {
        match token {
            "A" => Ok(Rank::Ace),
            "2" => Ok(Rank::Two),
            "3" => Ok(Rank::Three),
            "4" => Ok(Rank::Four),
            "5" => Ok(Rank::Five),
            "6" => Ok(Rank::Six),
            "7" => Ok(Rank::Seven),
            "8" => Ok(Rank::Eight),
            "9" => Ok(Rank::Nine),
            "10" => Ok(Rank::Ten),
            "J" => Ok(Rank::Jack),
            "Q" => Ok(Rank::Queen),
            "K" => Ok(Rank::King),
            _ => Err(EngineError::InvalidCardSpec { token: token.to_string() }),
        }
    }

    /// ランクをトークンに戻すよ。
    pub fn token(&self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// カードそのものを表す構造体だよ！🃏
///
/// 「このカードは、ハート♥️のAだよ！」みたいにね！
///
/// - `suit`: カードのスート
/// - `rank`: カードのランク
/// - `is_face_up`: カードが表向きか裏向きかを示すフラグ (trueなら表向き)
///
/// スートとランクは作った後は変わらない。プレイ中に変わるのは is_face_up だけ！
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)] // Copy は外したよ。カードの状態は変わる可能性があるからね。
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub is_face_up: bool, // カードが表向きかどうか
}

impl Card {
    /// スートとランクからカードを作るよ。最初は裏向き！
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank, is_face_up: false }
    }

    /// トークンのペアからカードを作るよ。("A", "S") → スペードのA！
    /// どっちかのトークンが不正なら `InvalidCardSpec` エラーで失敗する。
    pub fn from_tokens(rank_token: &str, suit_token: &str) -> Result<Self, EngineError> {
        Ok(Self::new(Suit::from_token(suit_token)?, Rank::from_token(rank_token)?))
    }
}

// "A of S" みたいな表示。デバッグログで読みやすいように！
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank.token(), self.suit.token())
    }
}

// --- テスト ---
// 簡単なテストを書いておこう！
#[cfg(test)]
mod tests {
    use super::*; // 上で定義した Suit, Rank, Card を使う

    #[test]
    fn create_card() {
        let card = Card::new(Suit::Spade, Rank::Ace);

        // 値がちゃんと設定されてるか確認
        assert_eq!(card.suit, Suit::Spade);
        assert_eq!(card.rank, Rank::Ace);
        assert_eq!(card.is_face_up, false); // 最初は裏向き

        // 表示も確認
        assert_eq!(card.to_string(), "A of S");
        println!("作成したカード: {:?}", card);
        println!("Card 作成テスト、成功！🎉");
    }

    #[test]
    fn rank_comparison() {
        // ランクの大小比較がちゃんとできるか確認
        assert!(Rank::Ace < Rank::Two);
        assert!(Rank::Ten < Rank::Jack);
        assert!(Rank::Queen < Rank::King);
        assert!(Rank::King > Rank::Ace);
        assert_eq!(Rank::Seven, Rank::Seven);

        println!("Rank の比較テスト、成功！🎉");
    }

    #[test]
    fn token_round_trip() {
        // 正しいトークンならちゃんと作れる
        let card = Card::from_tokens("10", "H").expect("10 of Hearts は作れるはず！");
        assert_eq!(card.rank, Rank::Ten);
        assert_eq!(card.suit, Suit::Heart);
        assert_eq!(card.rank.token(), "10");
        assert_eq!(card.suit.token(), "H");
    }

    #[test]
    fn invalid_tokens_are_rejected() {
        // 変なトークンは InvalidCardSpec エラーになるはず！🙅
        assert!(Suit::from_token("X").is_err(), "スート X は不正なはず");
        assert!(Rank::from_token("11").is_err(), "ランク 11 は不正なはず");
        assert!(Card::from_tokens("A", "♠").is_err(), "記号そのものはトークンじゃないよ");

        // エラーの中身に渡したトークンが入ってるかも見ておく
        let err = Rank::from_token("joker").unwrap_err();
        match err {
            crate::error::EngineError::InvalidCardSpec { token } => assert_eq!(token, "joker"),
        }
    }
}
