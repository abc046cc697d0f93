use crate::analytics::{emit_all, AnalyticsSink, LogSink, MemorySink};
use crate::list::{faucet_table, list_data};
use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use faucets_core::analytics::{AnalyticsEvent, SearchDebouncer};
use faucets_core::catalog::Catalog;
use faucets_core::filter::{filter_faucets, TypeFilter, WalletConnection};
use faucets_core::report::report_form_url;
use faucets_core::sort::SortKey;
use faucets_core::state::{update, Action, AppState, FilterValue};
use std::time::{Duration, Instant};
use tokio::io::{AsyncBufReadExt, BufReader};

/// How long the "copied" indicator stays on.
pub const COPIED_RESET: Duration = Duration::from_millis(1200);

const REPORT_MODAL: &str = "report";

const FAQ: &[(&str, &str)] = &[
    (
        "What is a testnet faucet?",
        "A service that hands out free test tokens so you can pay gas on a test network.",
    ),
    (
        "Why do some faucets require a wallet connection?",
        "They check ownership or on-chain activity before sending funds. Address-only faucets just need a pasted address.",
    ),
    (
        "Are testnet tokens worth anything?",
        "No. They only exist for development and cannot be exchanged for real assets.",
    ),
    (
        "A faucet is broken or missing. What can I do?",
        "Run `report` to get a form link prefilled with your current filters.",
    ),
];

const HELP: &str = "\
Commands:
  list                    show the current table
  search <text> | /<text> set the search text (empty clears it)
  chain <name>            toggle a chain filter
  asset <symbol>          toggle an asset filter
  amount <label>          toggle an amount filter (needs an asset)
  type <type>             toggle official, community, third-party or wallet
  wallet <class>          toggle address-only or wallet-required
  sort <column>           cycle faucet, chain, testnet or asset ordering
  reset                   clear every filter and the sort order
  open <id>               open a faucet
  report                  show the report-a-faucet link
  copy                    copy the report link
  close                   close the report dialog
  faq [n]                 list questions, or expand/collapse question n
  dark                    toggle dark mode
  quit";

#[derive(Debug, clap::Args, Clone)]
pub struct BrowseOptions {
    /// Start in dark mode
    #[arg(long, env = "FAUCETS_DARK_MODE")]
    pub dark: bool,

    /// Visit number reported with the page_visited event
    #[arg(long, env = "FAUCETS_VISIT_COUNT", default_value = "1")]
    pub visit_count: u32,

    /// Print every analytics event of the session on exit
    #[arg(long)]
    pub events: bool,

    /// Page URL forwarded to the report form
    #[arg(long, env = "FAUCETS_PAGE_URL")]
    pub page_url: Option<String>,
}

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Action(Action),
    List,
    Open(u32),
    Report,
    Copy,
    Faq(Option<usize>),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Quit,
}

fn required<'a>(verb: &str, rest: &'a str) -> Result<&'a str, String> {
    if rest.is_empty() {
        Err(format!("`{verb}` needs a value"))
    } else {
        Ok(rest)
    }
}

pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();

    if let Some(term) = line.strip_prefix('/') {
        return Ok(Command::Action(Action::SetSearch(term.trim().to_string())));
    }

    let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();

    let command = match verb.to_lowercase().as_str() {
        "" | "list" | "ls" => Command::List,
        "search" => Command::Action(Action::SetSearch(rest.to_string())),
        "chain" => Command::Action(Action::Toggle(FilterValue::Chain(
            required(verb, rest)?.to_string(),
        ))),
        "asset" => Command::Action(Action::Toggle(FilterValue::Asset(
            required(verb, rest)?.to_string(),
        ))),
        "amount" => Command::Action(Action::Toggle(FilterValue::Amount(
            required(verb, rest)?.to_string(),
        ))),
        "type" => Command::Action(Action::Toggle(FilterValue::Type(
            required(verb, rest)?.parse::<TypeFilter>()?,
        ))),
        "wallet" => Command::Action(Action::Toggle(FilterValue::Wallet(
            required(verb, rest)?.parse::<WalletConnection>()?,
        ))),
        "sort" => {
            let key = SortKey::parse(rest).ok_or_else(|| {
                format!("Invalid sort column: {rest}. Valid columns: faucet, chain, testnet, asset")
            })?;
            Command::Action(Action::Sort(key))
        }
        "reset" => Command::Action(Action::ResetFilters),
        "dark" => Command::Action(Action::ToggleDarkMode),
        "close" => Command::Action(Action::CloseModal),
        "open" => {
            let id = required(verb, rest)?
                .parse::<u32>()
                .map_err(|_| format!("Invalid faucet id: {rest}"))?;
            Command::Open(id)
        }
        "report" => Command::Report,
        "copy" => Command::Copy,
        "faq" if rest.is_empty() => Command::Faq(None),
        "faq" => match rest.parse::<usize>() {
            Ok(n) if n > 0 => Command::Faq(Some(n - 1)),
            _ => return Err(format!("Invalid FAQ number: {rest}")),
        },
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => {
            return Err(format!(
                "Unknown command: {other}. Type `help` for a list of commands"
            ))
        }
    };

    Ok(command)
}

/// Clipboard and browser access used by `copy` and `open`
pub trait Desktop {
    fn copy(&mut self, text: &str) -> Result<()>;
    fn open(&mut self, url: &str) -> Result<()>;
}

/// The system clipboard and default browser
#[derive(Default)]
pub struct SystemDesktop {
    clipboard: Option<arboard::Clipboard>,
}

impl Desktop for SystemDesktop {
    fn copy(&mut self, text: &str) -> Result<()> {
        let mut clipboard = match self.clipboard.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new().map_err(|e| eyre!("Clipboard unavailable: {e}"))?,
        };

        let result = clipboard
            .set_text(text)
            .map_err(|e| eyre!("Failed to copy to clipboard: {e}"));
        self.clipboard = Some(clipboard);

        result
    }

    fn open(&mut self, url: &str) -> Result<()> {
        open::that(url).with_context(|| format!("Failed to open {url}"))
    }
}

/// An interactive browsing session over one catalog
pub struct Session<S, D> {
    catalog: Catalog,
    state: AppState,
    debouncer: SearchDebouncer,
    copied_until: Option<Instant>,
    page_url: Option<String>,
    sink: S,
    desktop: D,
}

impl<S: AnalyticsSink, D: Desktop> Session<S, D> {
    pub fn new(
        catalog: Catalog,
        state: AppState,
        page_url: Option<String>,
        sink: S,
        desktop: D,
    ) -> Self {
        Self {
            catalog,
            state,
            debouncer: SearchDebouncer::default(),
            copied_until: None,
            page_url,
            sink,
            desktop,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    fn dispatch(&mut self, action: Action, now: Instant) {
        match &action {
            Action::SetSearch(term) => self.debouncer.input(term, now),
            Action::ResetFilters => self.debouncer.cancel(),
            _ => {}
        }

        let (next, events) = update(&self.state, action, &self.catalog);
        self.state = next;
        emit_all(&self.sink, &events);

        if !self.state.copied {
            self.copied_until = None;
        }
    }

    /// Earliest instant at which `on_timer` has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.debouncer.deadline(), self.copied_until) {
            (Some(search), Some(copied)) => Some(search.min(copied)),
            (search, copied) => search.or(copied),
        }
    }

    pub fn on_timer(&mut self, now: Instant) {
        if let Some(search_term) = self.debouncer.poll(now) {
            let result_count = filter_faucets(self.catalog.faucets(), &self.state.filters).len();
            self.sink.send(&AnalyticsEvent::SearchPerformed {
                search_term,
                result_count,
            });
        }

        if self.copied_until.is_some_and(|until| now >= until) {
            self.dispatch(Action::ClearCopied, now);
        }
    }

    pub fn execute(&mut self, command: Command, now: Instant) -> Reply {
        let text = match command {
            Command::Quit => return Reply::Quit,
            Command::Help => HELP.to_string(),
            Command::List => self.render_table(),
            Command::Action(action) => {
                let changes_rows = matches!(
                    action,
                    Action::SetSearch(_)
                        | Action::Toggle(_)
                        | Action::ResetFilters
                        | Action::Sort(_)
                );
                self.dispatch(action, now);
                if changes_rows {
                    self.render_table()
                } else {
                    self.render_status()
                }
            }
            Command::Open(id) => match self.catalog.get(id).map(|f| f.url.clone()) {
                Some(url) => {
                    self.dispatch(Action::OpenFaucet(id), now);
                    match self.desktop.open(&url) {
                        Ok(()) => format!("Opened {url}"),
                        Err(e) => {
                            log::warn!("{e:#}");
                            format!("Link: {url}")
                        }
                    }
                }
                None => Error::FaucetNotFound(id).to_string(),
            },
            Command::Report => {
                self.dispatch(Action::OpenModal(REPORT_MODAL.to_string()), now);
                format!(
                    "Report a faucet:\n{}\nType `copy` to copy the link or `close` to dismiss it.",
                    self.report_url()
                )
            }
            Command::Copy => {
                if self.state.modal.is_none() {
                    return Reply::Text("Nothing to copy. Run `report` first.".to_string());
                }
                let url = self.report_url();
                match self.desktop.copy(&url) {
                    Ok(()) => {
                        self.dispatch(Action::CopyFinished { ok: true }, now);
                        self.copied_until = Some(now + COPIED_RESET);
                        format!("{} {url}", "Copied!".green())
                    }
                    Err(e) => {
                        log::debug!("{e:#}");
                        self.dispatch(Action::CopyFinished { ok: false }, now);
                        format!("Link: {url}")
                    }
                }
            }
            Command::Faq(None) => self.render_faq(),
            Command::Faq(Some(index)) => match FAQ.get(index) {
                Some((question, _)) => {
                    self.dispatch(
                        Action::ToggleFaq {
                            index,
                            question: question.to_string(),
                        },
                        now,
                    );
                    self.render_faq()
                }
                None => format!("No FAQ entry {}", index + 1),
            },
        };

        Reply::Text(text)
    }

    fn report_url(&self) -> String {
        report_form_url(self.page_url.as_deref(), &self.state.filters)
    }

    fn render_status(&self) -> String {
        let mut parts = vec![format!(
            "dark mode {}",
            if self.state.dark_mode { "on" } else { "off" }
        )];
        if let Some(modal) = &self.state.modal {
            parts.push(format!("{modal} dialog open"));
        }
        if self.state.copied {
            parts.push("copied".to_string());
        }
        parts.join(", ")
    }

    pub fn render_table(&self) -> String {
        let output = list_data(&self.catalog, &self.state.filters, self.state.sort);
        let mut text = format!("Showing {} of {} faucets", output.count, output.total)
            .bright_cyan()
            .bold()
            .to_string();

        if let Some(key) = self.state.sort.key {
            text.push_str(&format!(" (sorted by {key} {})", self.state.sort.mode));
        }

        if !self.state.filters.assets.is_empty() {
            let amounts = self.catalog.available_amounts(&self.state.filters.assets);
            text.push_str(&format!("\nAmounts: {}", amounts.join(", ")).dimmed().to_string());
        }

        if output.faucets.is_empty() {
            text.push_str(&format!("\n{}", "No faucets match the current filters.".yellow()));
        } else {
            text.push_str(&format!("\n{}", faucet_table(&output.faucets)));
        }

        text
    }

    fn render_faq(&self) -> String {
        let mut text = String::new();
        for (idx, (question, answer)) in FAQ.iter().enumerate() {
            text.push_str(&format!("{}. {}\n", idx + 1, question.bold()));
            if self.state.open_faqs.contains(&idx) {
                text.push_str(&format!("   {answer}\n"));
            }
        }
        text
    }
}

pub async fn run(options: BrowseOptions, global: crate::Global) -> Result<()> {
    let catalog = crate::catalog::load(&global)?;
    let mut session = Session::new(
        catalog,
        AppState::new(options.dark),
        options.page_url.clone(),
        (LogSink, options.events.then(MemorySink::default)),
        SystemDesktop::default(),
    );

    session.dispatch(
        Action::PageVisited {
            visit_count: options.visit_count,
        },
        Instant::now(),
    );

    println!("{}", session.render_table());
    println!("{}", "Type `help` for a list of commands.".dimmed());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let deadline = session.next_deadline();
        let wake = tokio::time::Instant::from_std(deadline.unwrap_or_else(Instant::now));

        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };

                let command = match parse_command(&line) {
                    Ok(command) => command,
                    Err(message) => {
                        eprintln!("{}", message.red());
                        continue;
                    }
                };

                if global.verbose {
                    eprintln!("Command: {command:?}");
                }

                match session.execute(command, Instant::now()) {
                    Reply::Quit => break,
                    Reply::Text(text) => println!("{text}"),
                }

                if global.verbose {
                    eprintln!("State: {}", serde_json::to_string(session.state())?);
                }
            }
            _ = tokio::time::sleep_until(wake), if deadline.is_some() => {
                session.on_timer(Instant::now());
            }
        }
    }

    if let Some(memory) = &session.sink().1 {
        for event in memory.events() {
            println!("{}", serde_json::to_string(&event)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use faucets_core::analytics::SEARCH_DEBOUNCE;

    #[derive(Default)]
    struct FakeDesktop {
        fail: bool,
        copied: Vec<String>,
        opened: Vec<String>,
    }

    impl Desktop for FakeDesktop {
        fn copy(&mut self, text: &str) -> Result<()> {
            if self.fail {
                return Err(eyre!("no clipboard"));
            }
            self.copied.push(text.to_string());
            Ok(())
        }

        fn open(&mut self, url: &str) -> Result<()> {
            if self.fail {
                return Err(eyre!("no browser"));
            }
            self.opened.push(url.to_string());
            Ok(())
        }
    }

    fn create_session_with(desktop: FakeDesktop) -> Session<MemorySink, FakeDesktop> {
        Session::new(
            Catalog::builtin().unwrap(),
            AppState::default(),
            None,
            MemorySink::default(),
            desktop,
        )
    }

    fn create_session() -> Session<MemorySink, FakeDesktop> {
        create_session_with(FakeDesktop::default())
    }

    fn failing_session() -> Session<MemorySink, FakeDesktop> {
        create_session_with(FakeDesktop {
            fail: true,
            ..Default::default()
        })
    }

    fn names<D: Desktop>(session: &Session<MemorySink, D>) -> Vec<&'static str> {
        session.sink().events().iter().map(|e| e.name()).collect()
    }

    // ============================================================================
    // parse_command
    // ============================================================================

    #[test]
    fn test_parse_search_shortcut() {
        assert_eq!(
            parse_command("/ sepolia ").unwrap(),
            Command::Action(Action::SetSearch("sepolia".to_string()))
        );
        assert_eq!(
            parse_command("search").unwrap(),
            Command::Action(Action::SetSearch(String::new()))
        );
    }

    #[test]
    fn test_parse_toggles() {
        assert_eq!(
            parse_command("chain Arbitrum One").unwrap(),
            Command::Action(Action::Toggle(FilterValue::Chain(
                "Arbitrum One".to_string()
            )))
        );
        assert_eq!(
            parse_command("type third-party").unwrap(),
            Command::Action(Action::Toggle(FilterValue::Type(TypeFilter::ThirdParty)))
        );
        assert_eq!(
            parse_command("wallet address-only").unwrap(),
            Command::Action(Action::Toggle(FilterValue::Wallet(
                WalletConnection::AddressOnly
            )))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_command("chain").is_err());
        assert!(parse_command("type bogus").is_err());
        assert!(parse_command("sort price").is_err());
        assert!(parse_command("faq 0").is_err());
        assert!(parse_command("open abc").is_err());
        assert!(parse_command("fly").is_err());
    }

    #[test]
    fn test_parse_misc() {
        assert_eq!(parse_command("").unwrap(), Command::List);
        assert_eq!(parse_command("faq 2").unwrap(), Command::Faq(Some(1)));
        assert_eq!(parse_command("open 12").unwrap(), Command::Open(12));
        assert_eq!(
            parse_command("SORT Asset").unwrap(),
            Command::Action(Action::Sort(SortKey::Asset))
        );
        assert_eq!(parse_command("q").unwrap(), Command::Quit);
    }

    // ============================================================================
    // Session
    // ============================================================================

    #[test]
    fn test_search_is_debounced() {
        let start = Instant::now();
        let mut session = create_session();

        session.execute(Command::Action(Action::SetSearch("s".to_string())), start);
        session.execute(
            Command::Action(Action::SetSearch("sepolia".to_string())),
            start + Duration::from_millis(300),
        );

        session.on_timer(start + Duration::from_millis(900));
        assert!(session.sink().events().is_empty());

        session.on_timer(start + Duration::from_millis(300) + SEARCH_DEBOUNCE);
        let events = session.sink().events();
        assert_eq!(events.len(), 1);
        match &events[0] {
            AnalyticsEvent::SearchPerformed {
                search_term,
                result_count,
            } => {
                assert_eq!(search_term, "sepolia");
                assert!(*result_count > 0);
            }
            other => panic!("unexpected event: {other:?}"),
        }
        assert_eq!(session.next_deadline(), None);
    }

    #[test]
    fn test_reset_cancels_pending_search() {
        let start = Instant::now();
        let mut session = create_session();

        session.execute(Command::Action(Action::SetSearch("base".to_string())), start);
        session.execute(Command::Action(Action::ResetFilters), start);
        session.on_timer(start + SEARCH_DEBOUNCE);

        assert_eq!(names(&session), vec!["filters_reset"]);
    }

    #[test]
    fn test_copied_resets_after_timeout() {
        let start = Instant::now();
        let mut session = create_session();

        session.execute(Command::Report, start);
        let reply = session.execute(Command::Copy, start);
        assert!(matches!(reply, Reply::Text(text) if text.contains("Copied!")));
        assert!(session.state().copied);
        assert_eq!(session.next_deadline(), Some(start + COPIED_RESET));
        assert_eq!(session.desktop.copied, vec![session.report_url()]);

        session.on_timer(start + COPIED_RESET);

        assert!(!session.state().copied);
        assert_eq!(session.state().modal.as_deref(), Some(REPORT_MODAL));
        assert_eq!(names(&session), vec!["modal_opened", "link_copied"]);
    }

    #[test]
    fn test_copy_failure_is_not_reported_as_copied() {
        let start = Instant::now();
        let mut session = failing_session();

        session.execute(Command::Report, start);
        let reply = session.execute(Command::Copy, start);

        assert_eq!(reply, Reply::Text(format!("Link: {}", session.report_url())));
        assert!(!session.state().copied);
        assert_eq!(session.state().modal.as_deref(), Some(REPORT_MODAL));
        assert_eq!(session.next_deadline(), None);
        assert_eq!(names(&session), vec!["modal_opened"]);
    }

    #[test]
    fn test_copy_without_modal() {
        let mut session = create_session();

        let reply = session.execute(Command::Copy, Instant::now());

        assert_eq!(
            reply,
            Reply::Text("Nothing to copy. Run `report` first.".to_string())
        );
        assert!(!session.state().copied);
        assert!(session.desktop.copied.is_empty());
    }

    #[test]
    fn test_close_cancels_copied_timer() {
        let start = Instant::now();
        let mut session = create_session();

        session.execute(Command::Report, start);
        session.execute(Command::Copy, start);
        session.execute(Command::Action(Action::CloseModal), start);

        assert_eq!(session.next_deadline(), None);
        assert!(session.state().modal.is_none());
    }

    #[test]
    fn test_open_faucet() {
        let mut session = create_session();
        let faucet = Catalog::builtin().unwrap().faucets()[0].clone();

        let reply = session.execute(Command::Open(faucet.id), Instant::now());
        assert_eq!(reply, Reply::Text(format!("Opened {}", faucet.url)));
        assert_eq!(session.desktop.opened, vec![faucet.url]);
        assert_eq!(names(&session), vec!["faucet_opened"]);

        let reply = session.execute(Command::Open(u32::MAX), Instant::now());
        assert!(matches!(reply, Reply::Text(text) if text.contains("not found")));
        assert_eq!(session.sink().events().len(), 1);
    }

    #[test]
    fn test_open_failure_prints_link() {
        let mut session = failing_session();
        let faucet = Catalog::builtin().unwrap().faucets()[0].clone();

        let reply = session.execute(Command::Open(faucet.id), Instant::now());

        assert_eq!(reply, Reply::Text(format!("Link: {}", faucet.url)));
        assert!(session.desktop.opened.is_empty());
        assert_eq!(names(&session), vec!["faucet_opened"]);
    }

    #[test]
    fn test_faq_toggle() {
        let mut session = create_session();

        session.execute(Command::Faq(Some(0)), Instant::now());
        assert!(session.state().open_faqs.contains(&0));

        session.execute(Command::Faq(Some(0)), Instant::now());
        assert!(session.state().open_faqs.is_empty());

        let reply = session.execute(Command::Faq(Some(99)), Instant::now());
        assert_eq!(reply, Reply::Text("No FAQ entry 100".to_string()));
        assert_eq!(names(&session), vec!["faq_opened"]);
    }

    #[test]
    fn test_filters_and_reset() {
        let mut session = create_session();
        let now = Instant::now();

        session.execute(
            Command::Action(Action::Toggle(FilterValue::Chain("Solana".to_string()))),
            now,
        );
        session.execute(Command::Action(Action::Sort(SortKey::Faucet)), now);
        session.execute(Command::Action(Action::ResetFilters), now);

        assert_eq!(session.state().filters, Default::default());
        assert_eq!(
            names(&session),
            vec!["filter_changed", "table_sorted", "filters_reset"]
        );
    }

    #[test]
    fn test_quit() {
        let mut session = create_session();
        assert_eq!(session.execute(Command::Quit, Instant::now()), Reply::Quit);
    }
}
