//! Interactive demo of the pagination engine over an in-memory source.
//!
//! Runs a small REPL against a generated dataset so the engine's behavior is
//! observable without wiring up a real backend: page walks, search, sorting,
//! page-size changes, and failure/retry handling. Type `help` at the prompt
//! for the command list.

use std::io::{BufRead, Write};
use std::sync::{Arc, Mutex};
use std::time::Instant;

use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use serde_json::{json, Value};

use backpager::observability::init_tracing;
use backpager::{
    Event, FetchError, FetchParams, FetchResult, MemorySource, PageSource, PagerConfig,
    PagerDriver, PagerError, Result, SortDirection, SortState,
};

const HELP: &str = "\
commands:
  next                 go to the next page
  prev                 go to the previous page
  first                jump to the first page
  search <term>        filter rows (empty term clears the filter)
  sort <field> [dir]   sort by field, dir is asc (default) or desc
  unsort               clear the sort
  size <n>             change the page size
  retry                retry after a failed fetch
  fail                 make the next fetch fail (then try `retry`)
  help                 show this message
  quit                 exit";

/// Shared switch that makes the next fetch fail once.
type FailSwitch = Arc<Mutex<Option<FetchError>>>;

/// Wraps [`MemorySource`] so the REPL can inject a failure while the driver
/// owns the source.
struct FlakySource {
    inner: MemorySource,
    fail_next: FailSwitch,
}

impl PageSource<Value> for FlakySource {
    fn fetch_page(&mut self, params: FetchParams) -> BoxFuture<'_, FetchResult<Value>> {
        let injected = self.fail_next.lock().ok().and_then(|mut slot| slot.take());
        match injected {
            Some(error) => Box::pin(futures_util::future::ready(Err(error))),
            None => self.inner.fetch_page(params),
        }
    }
}

fn sample_rows() -> Vec<Value> {
    let names = [
        "amara", "bruno", "chiyo", "dalia", "emeka", "farid", "goran", "hana", "ines", "jonas",
        "kofi", "lena", "milan", "nadia", "omar", "priya", "quinn", "rosa", "sven", "talia",
        "umar", "vera", "wren", "ximena", "yusuf", "zola",
    ];
    names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            json!({
                "id": i + 1,
                "name": name,
                "team": if i % 3 == 0 { "core" } else { "platform" },
            })
        })
        .collect()
}

fn render(driver: &PagerDriver<Value>) {
    let view = driver.view();

    if let Some(error) = view.error {
        println!("  ! fetch failed: {error} (type `retry`)");
    }
    if view.items.is_empty() {
        match view.range.total {
            Some(0) => println!("  no matches"),
            _ => println!("  nothing loaded"),
        }
        return;
    }

    for row in view.items {
        let id = row.get("id").and_then(Value::as_u64).unwrap_or(0);
        let name = row.get("name").and_then(Value::as_str).unwrap_or("?");
        let team = row.get("team").and_then(Value::as_str).unwrap_or("?");
        println!("  #{id:>3}  {name:<8} {team}");
    }

    let total = match view.range.total {
        Some(total) => total.to_string(),
        None => "?".into(),
    };
    let mut footer = format!("  -- {}-{} of {}", view.range.start, view.range.end, total);
    if view.can_load_previous {
        footer.push_str("  [prev]");
    }
    if view.can_load_next {
        footer.push_str("  [next]");
    }
    println!("{footer}");
}

fn parse_sort(args: &str) -> Option<SortState> {
    let mut parts = args.split_whitespace();
    let field = parts.next()?;
    let direction = match parts.next() {
        None | Some("asc") => SortDirection::Ascending,
        Some("desc") => SortDirection::Descending,
        Some(other) => {
            println!("unknown direction `{other}` (use asc or desc)");
            return None;
        }
    };
    Some(SortState {
        field: field.to_string(),
        direction,
    })
}

fn dispatch(driver: &mut PagerDriver<Value>, event: Event<Value>) {
    // The in-memory source resolves synchronously, so the dispatch future
    // never actually suspends.
    if driver.dispatch(event).now_or_never().is_none() {
        tracing::warn!("dispatch did not resolve synchronously");
    }
}

fn run() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => PagerConfig::from_file(path)?,
        None => PagerConfig::default(),
    };
    init_tracing(config.trace_level.as_deref());

    let rows = sample_rows();
    let row_count = rows.len();
    let fail_next: FailSwitch = Arc::new(Mutex::new(None));
    let source = FlakySource {
        inner: MemorySource::new(rows),
        fail_next: Arc::clone(&fail_next),
    };

    let mut driver: PagerDriver<Value> = PagerDriver::new(&config, Box::new(source));
    if driver.start().now_or_never().is_none() {
        tracing::warn!("initial load did not resolve synchronously");
    }

    println!("backpager demo: {row_count} rows, page size {}", config.page_size);
    println!("{HELP}\n");
    render(&driver);

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        let (command, args) = match line.split_once(' ') {
            Some((c, a)) => (c, a.trim()),
            None => (line, ""),
        };

        let event = match command {
            "" => continue,
            "quit" | "exit" => break,
            "help" => {
                println!("{HELP}");
                continue;
            }
            "next" => Event::NextPageRequested,
            "prev" => Event::PreviousPageRequested,
            "first" => Event::FirstPageRequested,
            "retry" => Event::Retry,
            "search" => {
                // Commit directly; the debounce only matters for keystroke
                // streams, not line-based input.
                driver.search_input(args, Instant::now());
                if driver.flush_search().now_or_never().is_none() {
                    tracing::warn!("search dispatch did not resolve synchronously");
                }
                render(&driver);
                continue;
            }
            "sort" => match parse_sort(args) {
                Some(sort) => {
                    if driver.set_sort(Some(sort)).now_or_never().is_none() {
                        tracing::warn!("sort dispatch did not resolve synchronously");
                    }
                    render(&driver);
                    continue;
                }
                None => {
                    if args.is_empty() {
                        println!("usage: sort <field> [asc|desc]");
                    }
                    continue;
                }
            },
            "unsort" => {
                if driver.set_sort(None).now_or_never().is_none() {
                    tracing::warn!("sort dispatch did not resolve synchronously");
                }
                render(&driver);
                continue;
            }
            "size" => match args.parse::<usize>() {
                Ok(size) if size > 0 => Event::PageSizeChanged(size),
                _ => {
                    println!("usage: size <n>, n >= 1");
                    continue;
                }
            },
            "fail" => {
                if let Ok(mut slot) = fail_next.lock() {
                    *slot = Some(FetchError::Network("injected outage".into()));
                }
                println!("next fetch will fail");
                continue;
            }
            other => {
                println!("unknown command `{other}` (try `help`)");
                continue;
            }
        };

        dispatch(&mut driver, event);
        render(&driver);
    }

    Ok(())
}

fn main() {
    if let Err(error) = run() {
        match &error {
            PagerError::Config(message) => eprintln!("configuration error: {message}"),
            PagerError::Io(source) => eprintln!("io error: {source}"),
        }
        std::process::exit(1);
    }
}
