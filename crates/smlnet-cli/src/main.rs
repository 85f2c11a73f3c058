use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use smlnet_core::consent::{ConsentChoice, ConsentRecord, ConsentStore};
use smlnet_core::i18n::{Language, LanguageStore};
use smlnet_site::{catalog, legal};
use smlnet_site::{BannerView, ConsentBanner, ContactForm, Route, Service, SiteConfig};

mod profile;

use profile::Profile;

#[derive(Parser, Debug)]
#[command(name = "smlnet", version, about = "SMLnet site core, driven from the terminal")]
struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    json: bool,
    #[arg(long, global = true, help = "Visitor profile file (cookies and storage)")]
    profile: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        value_enum,
        help = "Resolve labels in this language instead of the saved one"
    )]
    lang: Option<LanguageArg>,
    #[arg(long, global = true, help = "Site configuration file (smlnet.json)")]
    site_config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Simulate a page load: what the banner shows, which language is active.
    Visit,
    /// Inspect or change the stored cookie consent.
    Consent {
        #[command(subcommand)]
        command: ConsentCommands,
    },
    /// Inspect or change the saved language.
    Lang {
        #[command(subcommand)]
        command: LangCommands,
    },
    /// Validate a contact form and print its mailto link.
    Contact(ContactArgs),
    /// List the site's routes, or resolve one path.
    Routes { path: Option<String> },
    /// Print an embedded legal document.
    Policy {
        #[arg(value_enum)]
        document: PolicyDoc,
    },
}

#[derive(Subcommand, Debug)]
enum ConsentCommands {
    Status,
    AcceptAll,
    RejectAll,
    /// Store exactly the given categories; omitted flags are refusals.
    Set {
        #[arg(long)]
        analytical: bool,
        #[arg(long)]
        marketing: bool,
    },
    Withdraw,
}

#[derive(Subcommand, Debug)]
enum LangCommands {
    Show,
    Set {
        #[arg(value_enum)]
        language: LanguageArg,
    },
}

#[derive(clap::Args, Debug)]
struct ContactArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    #[arg(long, value_enum)]
    service: Option<ServiceArg>,
    #[arg(long)]
    message: String,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LanguageArg {
    En,
    Nl,
}

impl From<LanguageArg> for Language {
    fn from(arg: LanguageArg) -> Language {
        match arg {
            LanguageArg::En => Language::En,
            LanguageArg::Nl => Language::Nl,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ServiceArg {
    WebDevelopment,
    WebHosting,
    Maintenance,
    Other,
}

impl From<ServiceArg> for Service {
    fn from(arg: ServiceArg) -> Service {
        match arg {
            ServiceArg::WebDevelopment => Service::WebDevelopment,
            ServiceArg::WebHosting => Service::WebHosting,
            ServiceArg::Maintenance => Service::Maintenance,
            ServiceArg::Other => Service::Other,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PolicyDoc {
    Cookie,
    Privacy,
}

#[derive(Serialize)]
struct JsonOut<T: Serialize> {
    ok: bool,
    data: T,
}

#[derive(Serialize)]
struct VisitReport {
    banner: &'static str,
    language: Language,
    consent: Option<ConsentRecord>,
    title: Option<&'static str>,
    description: Option<&'static str>,
}

#[derive(Serialize)]
struct RouteRow {
    path: &'static str,
    title: &'static str,
}

impl RouteRow {
    fn new(route: Route, language: Language) -> RouteRow {
        RouteRow {
            path: route.path(),
            title: route.title().resolve(language),
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let profile_path = match &cli.profile {
        Some(path) => path.clone(),
        None => default_profile_path()?,
    };
    let mut profile = Profile::load(&profile_path);

    let site_config = match &cli.site_config {
        Some(path) => SiteConfig::load(path)?,
        None => SiteConfig::default(),
    };

    // Labels follow the saved language unless --lang overrides it for
    // this one invocation.
    let language: Language = match cli.lang {
        Some(lang) => lang.into(),
        None => LanguageStore::load(&mut profile).active(),
    };

    match cli.command {
        Commands::Visit => {
            let store = ConsentStore::new(&mut profile);
            let banner = ConsentBanner::on_page_load(&store);
            let consent = store.get();
            let showing = banner.view() == BannerView::Notice;
            let report = VisitReport {
                banner: banner.view().as_str(),
                language,
                consent,
                title: showing.then(|| catalog::banner::TITLE.resolve(language)),
                description: showing.then(|| catalog::banner::DESCRIPTION.resolve(language)),
            };
            print_one(cli.json, report, |r| {
                let mut out = format!(
                    "banner: {}\nlanguage: {}\nconsent: {}",
                    r.banner,
                    r.language,
                    r.consent
                        .as_ref()
                        .map(describe_record)
                        .unwrap_or_else(|| "none".to_owned()),
                );
                if let (Some(title), Some(description)) = (r.title, r.description) {
                    out.push_str(&format!("\n\n{title}\n{description}"));
                }
                out
            })?;
        }
        Commands::Consent { command } => match command {
            ConsentCommands::Status => {
                let store = ConsentStore::new(&mut profile);
                let record = store.get();
                print_one(cli.json, record, |r| match r {
                    Some(record) => describe_record(record),
                    None => "no decision stored".to_owned(),
                })?;
            }
            ConsentCommands::AcceptAll => {
                let mut store = ConsentStore::new(&mut profile);
                let record = store.set(ConsentChoice::ACCEPT_ALL);
                profile.save(&profile_path)?;
                print_one(cli.json, record, |r| describe_record(r))?;
            }
            ConsentCommands::RejectAll => {
                let mut store = ConsentStore::new(&mut profile);
                let record = store.set(ConsentChoice::REJECT_ALL);
                profile.save(&profile_path)?;
                print_one(cli.json, record, |r| describe_record(r))?;
            }
            ConsentCommands::Set {
                analytical,
                marketing,
            } => {
                let mut store = ConsentStore::new(&mut profile);
                let record = store.set(ConsentChoice {
                    analytical,
                    marketing,
                });
                profile.save(&profile_path)?;
                print_one(cli.json, record, |r| describe_record(r))?;
            }
            ConsentCommands::Withdraw => {
                let mut store = ConsentStore::new(&mut profile);
                store.withdraw();
                profile.save(&profile_path)?;
                print_one(cli.json, "withdrawn", |s| format!("consent {s}"))?;
            }
        },
        Commands::Lang { command } => match command {
            LangCommands::Show => {
                let store = LanguageStore::load(&mut profile);
                let active = store.active();
                print_one(cli.json, active, |l| l.as_str().to_owned())?;
            }
            LangCommands::Set { language } => {
                let mut store = LanguageStore::load(&mut profile);
                store.set_language(language.into());
                let active = store.active();
                profile.save(&profile_path)?;
                print_one(cli.json, active, |l| {
                    format!("language set to {}", l.as_str())
                })?;
            }
        },
        Commands::Contact(args) => {
            let form = ContactForm {
                name: args.name,
                email: args.email,
                service: args.service.map(Service::from),
                message: args.message,
            };
            let link = match form.mailto(&site_config, language) {
                Ok(link) => link,
                Err(err) => anyhow::bail!("{}", err.message().resolve(language)),
            };
            print_one(cli.json, link, |l| l.clone())?;
        }
        Commands::Routes { path } => match path {
            Some(path) => {
                let row = RouteRow::new(Route::from_path(&path), language);
                print_one(cli.json, row, |r| format!("{}\t{}", r.path, r.title))?;
            }
            None => {
                let rows: Vec<RouteRow> = Route::PAGES
                    .iter()
                    .map(|route| RouteRow::new(*route, language))
                    .collect();
                print_out(cli.json, &rows, |r| format!("{}\t{}", r.path, r.title))?;
            }
        },
        Commands::Policy { document } => {
            let route = match document {
                PolicyDoc::Cookie => Route::CookiePolicy,
                PolicyDoc::Privacy => Route::PrivacyPolicy,
            };
            let Some(text) = legal::document(route, language) else {
                anyhow::bail!("no embedded document for {route:?}");
            };
            print_one(cli.json, text, |t| t.to_string())?;
        }
    }

    Ok(())
}

fn describe_record(record: &ConsentRecord) -> String {
    format!(
        "functional={} analytical={} marketing={} since {}",
        record.functional,
        record.analytical,
        record.marketing,
        record.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
    )
}

fn default_profile_path() -> anyhow::Result<PathBuf> {
    let Some(base) = dirs::config_dir() else {
        anyhow::bail!("no configuration directory on this platform");
    };
    Ok(base.join("smlnet").join("profile.json"))
}

fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}

fn print_one<T: Serialize>(json: bool, data: T, row: impl Fn(&T) -> String) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}
