//! scrubnote: run pasted HTML through the editor's paste pipeline.
//!
//! The out-of-browser harness for the library crates: the input plays the
//! role of the clipboard's HTML flavor, goes through paste interception and
//! the deferred insertion queue, and the "edit surface" is stdout.

use std::fs;
use std::io::{self, Read, Write};
use std::process::ExitCode;
use std::time::Instant;

use editor::{
    ClipboardPayload, DeferredQueue, EditSurface, HTML_FLAVOR, PasteEvent, PasteInterceptor,
};
use mimalloc::MiMalloc;
use sanitize::{AllowList, AttributePolicy, PatternSanitizer, Sanitize, TreeSanitizer};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const USAGE: &str = "usage: scrubnote [--pattern] [--harden] [FILE]

Reads HTML from FILE (or stdin), runs it through the paste pipeline, and
writes the markup that would reach the editor to stdout.

  --pattern   use the textual tag-stripping variant instead of the
              tree-walking sanitizer
  --harden    strip on* handler attributes and javascript: urls
              (tree-walking variant only)
";

struct StdoutSurface {
    failed: bool,
}

impl EditSurface for StdoutSurface {
    fn insert_html_at_caret(&mut self, html: &str) -> bool {
        let mut stdout = io::stdout().lock();
        let ok = stdout
            .write_all(html.as_bytes())
            .and_then(|()| stdout.write_all(b"\n"))
            .is_ok();
        self.failed |= !ok;
        ok
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let mut use_pattern = false;
    let mut harden = false;
    let mut path: Option<String> = None;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--pattern" => use_pattern = true,
            "--harden" => harden = true,
            "--help" | "-h" => {
                print!("{USAGE}");
                return ExitCode::SUCCESS;
            }
            _ if arg.starts_with('-') => {
                eprintln!("scrubnote: unknown option {arg}\n{USAGE}");
                return ExitCode::FAILURE;
            }
            _ => {
                if path.is_some() {
                    eprintln!("scrubnote: more than one input file\n{USAGE}");
                    return ExitCode::FAILURE;
                }
                path = Some(arg);
            }
        }
    }

    let raw = match read_input(path.as_deref()) {
        Ok(raw) => raw,
        Err(err) => {
            eprintln!("scrubnote: {err}");
            return ExitCode::FAILURE;
        }
    };

    let allow = AllowList::editor_default();
    let sanitizer: Box<dyn Sanitize> = if use_pattern {
        if harden {
            eprintln!("scrubnote: --harden has no effect with --pattern, ignoring");
        }
        Box::new(PatternSanitizer::new(allow))
    } else if harden {
        Box::new(TreeSanitizer::new(allow).with_attribute_policy(AttributePolicy::StripActive))
    } else {
        Box::new(TreeSanitizer::new(allow))
    };

    let interceptor = PasteInterceptor::new(sanitizer);
    let mut queue = DeferredQueue::new();
    let mut event = PasteEvent::new(Some(ClipboardPayload::with_flavor(HTML_FLAVOR, &raw)), None);

    interceptor.on_paste(&mut event, &mut queue, Instant::now());

    // Honor the pipeline's settle delay before flushing the insertion.
    if let Some(due) = queue.next_due() {
        let now = Instant::now();
        if due > now {
            std::thread::sleep(due - now);
        }
    }

    let mut surface = StdoutSurface { failed: false };
    queue.run_due(Instant::now(), &mut surface);
    if surface.failed {
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn read_input(path: Option<&str>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut raw = String::new();
            io::stdin().lock().read_to_string(&mut raw)?;
            Ok(raw)
        }
    }
}
