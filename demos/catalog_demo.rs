use std::io::{self, Write};

use shelf_cache::{BookDraft, Catalog, MemoryRecordStore, SortKey};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Shelf Cache Catalog Demo");
    println!("========================");

    // Create a catalog over an in-memory store
    let mut catalog = Catalog::new(Box::new(MemoryRecordStore::new()));

    // Print a line whenever the cached view changes
    catalog.subscribe(|| println!("  [catalog changed]"));

    // Seed sample books
    add_sample_books(&mut catalog)?;
    println!("\nAdded {} books to the catalog.", catalog.len());

    // Sort by title so exact-title searches take the fast path
    catalog.sort(SortKey::Title);

    if let Some(genre) = catalog.top_genre() {
        println!("Top genre: {genre}");
    }

    // Interactive search loop
    loop {
        print!("\nEnter search query (or 'quit' to exit): ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        let query = input.trim();

        if query.eq_ignore_ascii_case("quit") {
            break;
        }

        let results = catalog.search(query);

        if results.is_empty() {
            println!("No results found.");
            continue;
        }

        println!("\nFound {} results:", results.len());
        for (i, book) in results.iter().enumerate() {
            println!(
                "{}. {} by {} ({}, {}, {} copies)",
                i + 1,
                book.title,
                book.author,
                book.genre,
                book.year,
                book.copies
            );
        }

        // Show same-genre recommendations for the first hit
        let related = catalog.related(results[0].id)?;
        if !related.is_empty() {
            println!("\nReaders of \"{}\" might also like:", results[0].title);
            for book in related {
                println!("  - {} by {}", book.title, book.author);
            }
        }
    }

    println!("\nGoodbye!");

    Ok(())
}

fn add_sample_books(catalog: &mut Catalog) -> Result<(), Box<dyn std::error::Error>> {
    catalog.add(
        BookDraft::new("1984")
            .with_author("George Orwell")
            .with_genre("Dystopian")
            .with_publisher("Secker & Warburg")
            .with_year(1949)
            .with_copies(4),
    )?;

    catalog.add(
        BookDraft::new("Animal Farm")
            .with_author("George Orwell")
            .with_genre("Dystopian")
            .with_publisher("Secker & Warburg")
            .with_year(1945)
            .with_copies(2),
    )?;

    catalog.add(
        BookDraft::new("Brave New World")
            .with_author("Aldous Huxley")
            .with_genre("Dystopian")
            .with_publisher("Chatto & Windus")
            .with_year(1932)
            .with_copies(3),
    )?;

    catalog.add(
        BookDraft::new("Dune")
            .with_author("Frank Herbert")
            .with_genre("SciFi")
            .with_publisher("Chilton Books")
            .with_year(1965)
            .with_copies(5),
    )?;

    catalog.add(
        BookDraft::new("Foundation")
            .with_author("Isaac Asimov")
            .with_genre("SciFi")
            .with_publisher("Gnome Press")
            .with_year(1951)
            .with_copies(2),
    )?;

    catalog.add(
        BookDraft::new("The Left Hand of Darkness")
            .with_author("Ursula K. Le Guin")
            .with_genre("SciFi")
            .with_publisher("Ace Books")
            .with_year(1969)
            .with_copies(1),
    )?;

    catalog.add(
        BookDraft::new("Pride and Prejudice")
            .with_author("Jane Austen")
            .with_genre("Romance")
            .with_publisher("T. Egerton")
            .with_year(1813)
            .with_copies(6),
    )?;

    catalog.add(
        BookDraft::new("The Name of the Rose")
            .with_author("Umberto Eco")
            .with_genre("Crime")
            .with_publisher("Bompiani")
            .with_year(1980)
            .with_copies(2),
    )?;

    Ok(())
}
