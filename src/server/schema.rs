use async_graphql::{EmptyMutation, EmptySubscription, ID, Object, Schema};

use crate::datamodel::{self, Library};

pub type LibrarySchema = Schema<RootQuery, EmptyMutation, EmptySubscription>;

pub fn build_schema(library: Library) -> LibrarySchema {
    Schema::build(RootQuery { library }, EmptyMutation, EmptySubscription).finish()
}

pub struct Book {
    record: &'static datamodel::Book,
    library: Library,
}

#[Object]
impl Book {
    async fn id(&self) -> ID {
        ID(self.record.id.to_owned())
    }

    async fn name(&self) -> &str {
        self.record.name
    }

    async fn genre(&self) -> &str {
        self.record.genre
    }

    /// The author this book was written by, if they are known.
    async fn author(&self) -> Option<Author> {
        tracing::debug!(author_id = self.record.author_id, "resolving author of book");
        self.library
            .author(self.record.author_id)
            .map(|record| Author::new(record, self.library))
    }
}

impl Book {
    fn new(record: &'static datamodel::Book, library: Library) -> Self {
        Self { record, library }
    }
}

pub struct Author {
    record: &'static datamodel::Author,
    library: Library,
}

#[Object]
impl Author {
    async fn id(&self) -> ID {
        ID(self.record.id.to_owned())
    }

    async fn name(&self) -> &str {
        self.record.name
    }

    async fn age(&self) -> i32 {
        self.record.age
    }

    /// All books written by this author.
    async fn book(&self) -> Vec<Book> {
        tracing::debug!(author_id = self.record.id, "resolving books of author");
        self.library
            .books_by(self.record.id)
            .into_iter()
            .map(|record| Book::new(record, self.library))
            .collect()
    }
}

impl Author {
    fn new(record: &'static datamodel::Author, library: Library) -> Self {
        Self { record, library }
    }
}

pub struct RootQuery {
    library: Library,
}

#[Object]
impl RootQuery {
    async fn book(&self, id: Option<ID>) -> Option<Book> {
        let id = id?;
        tracing::debug!(id = id.as_str(), "looking up book");
        self.library
            .book(&id)
            .map(|record| Book::new(record, self.library))
    }

    async fn author(&self, id: Option<ID>) -> Option<Author> {
        let id = id?;
        tracing::debug!(id = id.as_str(), "looking up author");
        self.library
            .author(&id)
            .map(|record| Author::new(record, self.library))
    }

    async fn books(&self) -> Vec<Book> {
        self.library
            .books()
            .iter()
            .map(|record| Book::new(record, self.library))
            .collect()
    }

    async fn authors(&self) -> Vec<Author> {
        self.library
            .authors()
            .iter()
            .map(|record| Author::new(record, self.library))
            .collect()
    }
}
