//! Deterministic sample data for `simulate`

use crate::types::NewBook;

const TITLES: &[&str] = &[
    "The Silent Harbor",
    "Echoes of the Dunes",
    "A Map of Small Kingdoms",
    "The Clockmaker's Daughter",
    "Winter at Ravensgate",
    "Lanterns Over Kyoto",
    "The Last Cartographer",
];

const AUTHORS: &[&str] = &[
    "Ada Whitfield",
    "Tomas Ferreira",
    "Mei Lin Zhao",
    "Oliver Grant",
    "Nadia Karim",
];

const GENRES: &[&str] = &[
    "Fantasy",
    "Science Fiction",
    "Mystery",
    "Historical Fiction",
    "Romance",
    "Non-Fiction",
];

/// The `index`-th sample book (0-based).
///
/// The three lists have coprime lengths, so combinations only repeat after
/// 210 books; the `#n` title suffix keeps every row distinct regardless.
pub fn sample_book(index: usize) -> NewBook {
    NewBook::new(
        format!("{} #{}", TITLES[index % TITLES.len()], index + 1),
        AUTHORS[index % AUTHORS.len()],
        GENRES[index % GENRES.len()],
    )
}

/// The first `n` sample books
pub fn sample_books(n: usize) -> impl Iterator<Item = NewBook> {
    (0..n).map(sample_book)
}
