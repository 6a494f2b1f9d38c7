pub mod search_books_cmd;
