use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use macro_copilot::dashboard::{self, View, ViewContent, ViewRequest};
use macro_copilot::viz::{self, Chart};
use macro_copilot::{Indicator, Phase, Session, Settings, config, countries};
use num_format::{Locale, ToFormattedString};
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "macro-copilot",
    version,
    about = "Chat with a macroeconomics copilot and explore World Bank indicators & exchange rates"
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Args, Debug)]
struct GlobalArgs {
    /// API key of the chat engine (only needed for `chat`).
    #[arg(long, global = true, env = config::ENV_API_KEY, hide_env_values = true)]
    api_key: Option<String>,
    /// Base URL of the OpenAI-compatible chat API.
    #[arg(long, global = true, env = config::ENV_OPENAI_URL)]
    openai_url: Option<String>,
    /// Chat model name.
    #[arg(long, global = true, env = config::ENV_MODEL)]
    model: Option<String>,
    /// Base URL of the World Bank API.
    #[arg(long, global = true, env = config::ENV_WORLDBANK_URL)]
    world_bank_url: Option<String>,
    /// Base URL of the exchange-rate API.
    #[arg(long, global = true, env = config::ENV_RATES_URL)]
    rates_url: Option<String>,
    /// TTF font used for chart text.
    #[arg(long, global = true, env = config::ENV_FONT)]
    font: Option<PathBuf>,
    /// Number format of printed values (en, de, fr, es, it, pt, nl).
    #[arg(long, global = true, default_value = "en")]
    locale: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Time series of one variable for one country.
    Series(SeriesArgs),
    /// One variable across all countries in a single year.
    Geo(GeoArgs),
    /// Latest exchange rates against USD.
    Rates(RatesArgs),
    /// List the countries known to the World Bank.
    Countries(CountriesArgs),
    /// List the supported variables and their indicator ids.
    Indicators,
    /// Talk to the copilot (interactive unless --message is given).
    Chat(ChatArgs),
}

#[derive(Args, Debug)]
struct PlotArgs {
    /// Write the chart to this path (.svg or .png).
    #[arg(long)]
    plot: Option<PathBuf>,
    /// Width of the plot (default 1000).
    #[arg(long, default_value_t = 1000)]
    width: u32,
    /// Height of the plot (default 600).
    #[arg(long, default_value_t = 600)]
    height: u32,
    /// Print the whole view as JSON instead of a table.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Args, Debug)]
struct SeriesArgs {
    /// Variable name, e.g. "GDP" or "Unemployment Rate".
    #[arg(short, long, default_value = "GDP")]
    variable: String,
    /// Country name, e.g. "Germany" or "Korea, Rep.".
    #[arg(short, long)]
    country: String,
    #[arg(long, default_value_t = dashboard::DEFAULT_YEAR_RANGE.0)]
    start: i32,
    #[arg(long, default_value_t = dashboard::DEFAULT_YEAR_RANGE.1)]
    end: i32,
    #[command(flatten)]
    plot: PlotArgs,
}

#[derive(Args, Debug)]
struct GeoArgs {
    #[arg(short, long, default_value = "GDP")]
    variable: String,
    #[arg(short, long, default_value_t = dashboard::DEFAULT_GEO_YEAR)]
    year: i32,
    /// Only print the N largest values.
    #[arg(long)]
    top: Option<usize>,
    #[command(flatten)]
    plot: PlotArgs,
}

#[derive(Args, Debug)]
struct RatesArgs {
    /// Currency codes separated by comma or semicolon (default EUR,GBP,JPY,AUD,CAD,CHF,CNY).
    #[arg(long)]
    currencies: Option<String>,
    #[command(flatten)]
    plot: PlotArgs,
}

#[derive(Args, Debug)]
struct CountriesArgs {
    /// Also print the resolved ISO alpha-3 code.
    #[arg(long, default_value_t = false)]
    codes: bool,
}

#[derive(Args, Debug)]
struct ChatArgs {
    /// Ask a single question and exit.
    #[arg(short, long)]
    message: Option<String>,
}

fn parse_list(s: &str) -> Vec<String> {
    s.split([',', ';'])
        .map(|x| x.trim().to_ascii_uppercase())
        .filter(|x| !x.is_empty())
        .collect()
}

fn fmt_value(v: f64, locale: &Locale, dec_sep: char) -> String {
    if !v.is_finite() {
        return "NA".to_string();
    }
    if v.abs() >= 1000.0 {
        (v.round() as i64).to_formatted_string(locale)
    } else {
        // Format up to 4 decimals, then trim trailing zeros and trailing dot.
        let s = format!("{:.4}", v);
        let s = s.trim_end_matches('0').trim_end_matches('.');
        s.replace('.', &dec_sep.to_string())
    }
}

fn settings_from(args: &GlobalArgs) -> Settings {
    let mut s = Settings::from_env().with_api_key(args.api_key.clone());
    if let Some(url) = &args.openai_url {
        s.openai_url = url.clone();
    }
    if let Some(model) = &args.model {
        s.model = model.clone();
    }
    if let Some(url) = &args.world_bank_url {
        s.world_bank_url = url.clone();
    }
    if let Some(url) = &args.rates_url {
        s.rates_url = url.clone();
    }
    if args.font.is_some() {
        s.font_path = args.font.clone();
    }
    s
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let settings = settings_from(&cli.global);
    let mut session = Session::new(settings).context("create HTTP client")?;
    let (locale, dec_sep) = viz::util::map_locale(&cli.global.locale);

    match cli.cmd {
        Command::Series(args) => {
            let request = ViewRequest::TimeSeries {
                variable: args.variable,
                country: args.country,
                start_year: dashboard::clamp_year(args.start.min(args.end)),
                end_year: dashboard::clamp_year(args.start.max(args.end)),
            };
            show_view(&mut session, &request, &args.plot, None, locale, dec_sep)
        }
        Command::Geo(args) => {
            let request = ViewRequest::Geographic {
                variable: args.variable,
                year: dashboard::clamp_year(args.year),
            };
            show_view(&mut session, &request, &args.plot, args.top, locale, dec_sep)
        }
        Command::Rates(args) => {
            let request = ViewRequest::ExchangeRates {
                currencies: args.currencies.as_deref().map(parse_list),
            };
            show_view(&mut session, &request, &args.plot, None, locale, dec_sep)
        }
        Command::Countries(args) => cmd_countries(&mut session, args),
        Command::Indicators => {
            for indicator in Indicator::ALL {
                println!("{:<20} {}", indicator.name(), indicator.code());
            }
            println!("{:<20} (exchangerate.host, base USD)", dashboard::EXCHANGE_RATES);
            Ok(())
        }
        Command::Chat(args) => cmd_chat(&mut session, args),
    }
}

fn show_view(
    session: &mut Session,
    request: &ViewRequest,
    plot: &PlotArgs,
    top: Option<usize>,
    locale: &Locale,
    dec_sep: char,
) -> Result<()> {
    let view = dashboard::build_view(&mut session.data, request);
    if plot.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print_view(&view, top, locale, dec_sep);
    }

    if let (Some(path), Some(chart)) = (plot.plot.as_ref(), view.chart()) {
        viz::ensure_fonts_registered(session.settings().font_path.as_deref())?;
        viz::render_to_file(chart, path, plot.width, plot.height)?;
        eprintln!("Wrote plot to {}", path.display());
    }
    Ok(())
}

fn print_view(view: &View, top: Option<usize>, locale: &Locale, dec_sep: char) {
    if let Some(heading) = &view.heading {
        println!("{heading}");
    }
    for notice in &view.notices {
        eprintln!("{notice}");
    }
    let chart = match &view.content {
        ViewContent::Warning(message) => {
            eprintln!("warning: {message}");
            return;
        }
        ViewContent::Chart(chart) => chart,
    };
    if let Some(caption) = &view.caption {
        println!("{caption}");
    }
    match chart {
        Chart::Line(c) => {
            for (date, value) in &c.points {
                println!("{}  {}", date, fmt_value(*value, locale, dec_sep));
            }
        }
        Chart::Choropleth(c) => {
            let mut regions: Vec<_> = c.regions.iter().collect();
            regions.sort_by(|a, b| b.value.total_cmp(&a.value));
            let n = top.unwrap_or(regions.len());
            for r in regions.into_iter().take(n) {
                println!(
                    "{}  {:<40} {}",
                    r.code,
                    r.name,
                    fmt_value(r.value, locale, dec_sep)
                );
            }
        }
        Chart::Bar(c) => {
            for (currency, rate) in &c.bars {
                println!("{currency}  {}", fmt_value(*rate, locale, dec_sep));
            }
        }
    }
}

fn cmd_countries(session: &mut Session, args: CountriesArgs) -> Result<()> {
    let fetched = session.data.country_list();
    if let Some(notice) = &fetched.notice {
        bail!("{}", notice.message);
    }
    for name in &fetched.rows {
        if args.codes {
            let code = countries::resolve(name).unwrap_or("---");
            println!("{code}  {name}");
        } else {
            println!("{name}");
        }
    }
    Ok(())
}

fn print_fragment(fragment: &str) {
    print!("{fragment}");
    let _ = std::io::stdout().flush();
}

fn cmd_chat(session: &mut Session, args: ChatArgs) -> Result<()> {
    if !session.chat_enabled() {
        bail!(
            "chat needs an API key: pass --api-key or set {}",
            config::ENV_API_KEY
        );
    }

    if let Some(message) = args.message {
        session.ask(&message, print_fragment)?;
        println!();
        return Ok(());
    }

    if let Some(greeting) = session.chat.messages().last() {
        println!("{}\n", greeting.content);
    }
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let line = line.trim();
        if matches!(line, "exit" | "quit") {
            break;
        }
        let result = match session.chat.phase() {
            Phase::AwaitingAssistant if line.is_empty() => session.respond(print_fragment),
            Phase::AwaitingAssistant => {
                eprintln!("(the last question is still unanswered; press Enter to retry)");
                continue;
            }
            Phase::AwaitingUser if line.is_empty() => continue,
            Phase::AwaitingUser => session.ask(line, print_fragment),
        };
        match result {
            Ok(_) => println!("\n"),
            Err(e) => eprintln!("\nerror: {e}"),
        }
    }
    Ok(())
}
