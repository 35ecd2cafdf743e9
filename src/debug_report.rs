use wordstrip::PrefixFinder;

mod ansi {
    const RESET: &str = "\x1b[0m";

    /// What a piece of report text is, mapped to one SGR sequence.
    #[derive(Debug, Clone, Copy)]
    pub enum Style {
        Rule,
        Title,
        Label,
        Count,
        Value,
        Prefix,
        Muted,
    }

    impl Style {
        fn code(self) -> &'static str {
            match self {
                Style::Rule => "\x1b[90m",
                Style::Title => "\x1b[1;36m",
                Style::Label => "\x1b[34m",
                Style::Count => "\x1b[33m",
                Style::Value => "\x1b[32m",
                Style::Prefix => "\x1b[1;32m",
                Style::Muted => "\x1b[2m",
            }
        }
    }

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, style: Style, s: impl AsRef<str>) -> String {
            let s = s.as_ref();
            if self.enabled { format!("{}{s}{RESET}", style.code()) } else { s.to_string() }
        }
    }
}

use ansi::{Palette, Style};

pub fn print_engine(finder: &PrefixFinder, color: bool) {
    let p = Palette::new(color);
    let metrics = finder.build_metrics();

    println!("\n{}", p.paint(Style::Rule, "━━━ Engine ━━━"));
    println!(
        "  {} {}  │  {} {}  │  {} {:?}",
        p.paint(Style::Label, "templates:"),
        p.paint(Style::Count, metrics.templates.to_string()),
        p.paint(Style::Label, "spliced:"),
        p.paint(Style::Count, metrics.spliced_templates.to_string()),
        p.paint(Style::Label, "policy:"),
        finder.tie_break(),
    );
    println!(
        "  {} {} {}  │  {} {}  │  {} {}",
        p.paint(Style::Label, "nodes:"),
        p.paint(Style::Count, metrics.nodes.to_string()),
        p.paint(Style::Muted, format!("({} in fragments)", metrics.fragment_nodes)),
        p.paint(Style::Label, "branches:"),
        p.paint(Style::Count, metrics.branch_nodes.to_string()),
        p.paint(Style::Label, "category words:"),
        p.paint(Style::Count, metrics.category_words.to_string()),
    );
    if !finder.ignored().is_empty() {
        let mut ignored: Vec<&str> = finder.ignored().iter().map(String::as_str).collect();
        ignored.sort_unstable();
        println!("  {} {}", p.paint(Style::Label, "ignored:"), p.paint(Style::Muted, ignored.join(", ")));
    }

    println!("\n{}", p.paint(Style::Rule, "━━━ Build timing ━━━"));
    println!(
        "  {} {}  │  compile {:?}  │  fragments {:?}  │  insert {:?}",
        p.paint(Style::Label, "total:"),
        p.paint(Style::Value, format!("{:?}", metrics.total)),
        metrics.compile,
        metrics.fragments,
        metrics.insertion,
    );
}

pub fn print_phrase(phrase: &str, finder: &PrefixFinder, sort_key: bool, color: bool) {
    let p = Palette::new(color);
    println!("\n{}", p.paint(Style::Title, format!("⚙  Stripping: \"{phrase}\"")));

    match finder.find_prefix(phrase) {
        Some(found) => {
            println!(
                "  {} {} {}",
                p.paint(Style::Label, "prefix:"),
                p.paint(Style::Prefix, &found.prefix),
                p.paint(Style::Count, format!("({} words)", found.words)),
            );
            if found.forks > 0 {
                println!("  {}", p.paint(Style::Muted, format!("resolved {} ambiguous fork(s)", found.forks)));
            }
        }
        None => println!("  {}", p.paint(Style::Muted, "✗ no filler prefix")),
    }

    println!("  {} {}", p.paint(Style::Label, "stripped:"), p.paint(Style::Value, finder.remove_prefix(phrase)));
    if sort_key {
        let key = finder.calculate_base_of_from_for_sorting(phrase);
        println!("  {} {}", p.paint(Style::Label, "sort key:"), p.paint(Style::Value, key));
    }
}
