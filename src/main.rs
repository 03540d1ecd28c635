//! # Endpoints Demo
//!
//! Decodes the bundled fixture documents and logs what each relationship ended up as.
//!
//! The fixture directory comes from `ENDPOINTS_FIXTURES` (default `fixtures`), and log
//! verbosity from `RUST_LOG`. Fixtures are fetched concurrently; each decode is independent.

use endpoints::framework::{Cardinality, Resource, To};
use endpoints::lifecycle::{setup_tracing, Config};
use endpoints::model::{Author, Book, Store};
use endpoints::source::{DocumentSource, FixtureDir, SourceError};
use tracing::{error, info, Instrument};

/// Logs a relationship's state and, when unfetched, its pointers.
fn describe<C: Cardinality>(name: &str, to: &To<C>) {
    info!(relationship = name, state = to.related().state(), pointers = ?to.as_unfetched(), "Relationship");
}

fn report<R: Resource>(name: &str, result: &Result<R, SourceError>) -> bool {
    match result {
        Ok(resource) => {
            info!(fixture = name, id = %resource.head().id, "Decoded");
            true
        }
        Err(e) => {
            error!(fixture = name, error = %e, "Fixture failed");
            false
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = Config::from_env();
    info!(fixtures = %config.fixtures_dir.display(), "Starting fixture decode");
    let source = FixtureDir::new(&config.fixtures_dir);

    let span = tracing::info_span!("fixtures");
    let (empty, full, book, author) = async {
        tokio::join!(
            source.fetch_resource::<Store>("EmptyStore"),
            source.fetch_resource::<Store>("FullStore"),
            source.fetch_resource::<Book>("Book"),
            source.fetch_resource::<Author>("Author"),
        )
    }
    .instrument(span)
    .await;

    let mut ok = true;
    ok &= report("EmptyStore", &empty);
    ok &= report("FullStore", &full);
    ok &= report("Book", &book);
    ok &= report("Author", &author);

    if let Ok(store) = &full {
        describe("books", &store.books);
    }
    if let Ok(book) = &book {
        describe("author", &book.author);
        describe("series", &book.series);
        describe("chapters", &book.chapters);
        describe("stores", &book.stores);
    }

    // A deliberately broken document, to show every failure being reported at once.
    match source.fetch_resource::<Store>("InvalidStore").await {
        Err(SourceError::Decode(errors)) => {
            for e in &errors {
                info!(path = %e.path(), kind = ?e.kind(), "InvalidStore: {e}");
            }
        }
        other => {
            error!(?other, "InvalidStore should have failed to decode");
            ok = false;
        }
    }

    if ok {
        info!("All fixtures decoded");
        Ok(())
    } else {
        Err("one or more fixtures failed to decode".to_string())
    }
}
