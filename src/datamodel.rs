#[derive(Debug, PartialEq, Eq)]
pub struct Author {
    pub id: &'static str,
    pub name: &'static str,
    pub age: i32,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Book {
    pub id: &'static str,
    pub name: &'static str,
    pub genre: &'static str,
    /// Not checked against [`ALL_AUTHORS`], a dangling id simply matches nothing.
    pub author_id: &'static str,
}

pub static ALL_AUTHORS: &[Author] = &[
    Author {
        id: "1",
        name: "Patrick Bateman",
        age: 29,
    },
    Author {
        id: "2",
        name: "Bruce Wayne",
        age: 33,
    },
    Author {
        id: "3",
        name: "Peter Parker",
        age: 25,
    },
];

pub static ALL_BOOKS: &[Book] = &[
    Book {
        id: "1",
        name: "Name of thw Wind",
        genre: "Fantasy",
        author_id: "1",
    },
    Book {
        id: "2",
        name: "The Final Empire",
        genre: "Fantasy",
        author_id: "2",
    },
    Book {
        id: "3",
        name: "The Long Earth",
        genre: "Sci-Fi",
        author_id: "3",
    },
    Book {
        id: "4",
        name: "The Hero Of Ages",
        genre: "Fantasy",
        author_id: "2",
    },
    Book {
        id: "5",
        name: "The Colourof Magic",
        genre: "Fantasy",
        author_id: "3",
    },
    Book {
        id: "6",
        name: "The Loght Fantastic",
        genre: "Fantasy",
        author_id: "3",
    },
];

/// The two collections every query resolves against.
///
/// All lookups are linear scans returning the first match in stored order.
#[derive(Clone, Copy, Debug)]
pub struct Library {
    books: &'static [Book],
    authors: &'static [Author],
}

impl Default for Library {
    fn default() -> Self {
        Self::new(ALL_BOOKS, ALL_AUTHORS)
    }
}

impl Library {
    pub fn new(books: &'static [Book], authors: &'static [Author]) -> Self {
        Self { books, authors }
    }

    pub fn books(&self) -> &'static [Book] {
        self.books
    }

    pub fn authors(&self) -> &'static [Author] {
        self.authors
    }

    pub fn book(&self, id: &str) -> Option<&'static Book> {
        self.books.iter().find(|book| book.id == id)
    }

    pub fn author(&self, id: &str) -> Option<&'static Author> {
        self.authors.iter().find(|author| author.id == id)
    }

    pub fn books_by(&self, author_id: &str) -> Vec<&'static Book> {
        self.books
            .iter()
            .filter(|book| book.author_id == author_id)
            .collect()
    }
}
