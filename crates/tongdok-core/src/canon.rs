//! Canon table: the ordered books of each testament and their chapter counts.

use serde::{Deserialize, Serialize};

/// A book of the canon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Book {
    pub name: &'static str,
    pub chapters: u32,
}

impl Book {
    pub const fn new(name: &'static str, chapters: u32) -> Self {
        Self { name, chapters }
    }
}

/// Old Testament in canonical order.
pub const OLD_TESTAMENT: [Book; 39] = [
    Book::new("창세기", 50),
    Book::new("출애굽기", 40),
    Book::new("레위기", 27),
    Book::new("민수기", 36),
    Book::new("신명기", 34),
    Book::new("여호수아", 24),
    Book::new("사사기", 21),
    Book::new("룻기", 4),
    Book::new("사무엘상", 31),
    Book::new("사무엘하", 24),
    Book::new("열왕기상", 22),
    Book::new("열왕기하", 25),
    Book::new("역대상", 29),
    Book::new("역대하", 36),
    Book::new("에스라", 10),
    Book::new("느헤미야", 13),
    Book::new("에스더", 10),
    Book::new("욥기", 42),
    Book::new("시편", 150),
    Book::new("잠언", 31),
    Book::new("전도서", 12),
    Book::new("아가", 8),
    Book::new("이사야", 66),
    Book::new("예레미야", 52),
    Book::new("예레미야애가", 5),
    Book::new("에스겔", 48),
    Book::new("다니엘", 12),
    Book::new("호세아", 14),
    Book::new("요엘", 3),
    Book::new("아모스", 9),
    Book::new("오바댜", 1),
    Book::new("요나", 4),
    Book::new("미가", 7),
    Book::new("나훔", 3),
    Book::new("하박국", 3),
    Book::new("스바냐", 3),
    Book::new("학개", 2),
    Book::new("스가랴", 14),
    Book::new("말라기", 4),
];

/// New Testament in canonical order.
pub const NEW_TESTAMENT: [Book; 27] = [
    Book::new("마태복음", 28),
    Book::new("마가복음", 16),
    Book::new("누가복음", 24),
    Book::new("요한복음", 21),
    Book::new("사도행전", 28),
    Book::new("로마서", 16),
    Book::new("고린도전서", 16),
    Book::new("고린도후서", 13),
    Book::new("갈라디아서", 6),
    Book::new("에베소서", 6),
    Book::new("빌립보서", 4),
    Book::new("골로새서", 4),
    Book::new("데살로니가전서", 5),
    Book::new("데살로니가후서", 3),
    Book::new("디모데전서", 6),
    Book::new("디모데후서", 4),
    Book::new("디도서", 3),
    Book::new("빌레몬서", 1),
    Book::new("히브리서", 13),
    Book::new("야고보서", 5),
    Book::new("베드로전서", 5),
    Book::new("베드로후서", 3),
    Book::new("요한일서", 5),
    Book::new("요한이서", 1),
    Book::new("요한삼서", 1),
    Book::new("유다서", 1),
    Book::new("요한계시록", 22),
];

/// Which half of the canon a plan track reads through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Testament {
    Old,
    New,
}

impl Testament {
    pub fn books(&self) -> &'static [Book] {
        match self {
            Self::Old => &OLD_TESTAMENT,
            Self::New => &NEW_TESTAMENT,
        }
    }

    /// Short Korean label used in output ("구약" / "신약").
    pub fn label(&self) -> &'static str {
        match self {
            Self::Old => "구약",
            Self::New => "신약",
        }
    }
}

/// Index of a book by exact name.
pub fn find_book(books: &[Book], name: &str) -> Option<usize> {
    books.iter().position(|book| book.name == name)
}

/// Look a book up in either testament.
pub fn lookup(name: &str) -> Option<(Testament, Book)> {
    [Testament::Old, Testament::New]
        .into_iter()
        .find_map(|testament| {
            testament
                .books()
                .iter()
                .find(|book| book.name == name)
                .map(|book| (testament, *book))
        })
}

/// Total number of chapters in a book sequence.
pub fn total_chapters(books: &[Book]) -> u64 {
    books.iter().map(|book| u64::from(book.chapters)).sum()
}
