use clap::Parser;
use sitemeta::application::{
    apply_terms::{ApplyTermsOptions, ApplyTermsService},
    breadcrumbs::BreadcrumbService,
    build_sitemap::SitemapService,
    init::InitService,
    manage_config::ConfigService,
    notices::NoticesService,
    render_head::{HeadOutput, HeadService},
};
use sitemeta::cli::{output, Cli, Commands, TermsCommands};
use sitemeta::domain::breadcrumbs::{render_html, BreadcrumbOptions};
use sitemeta::domain::schema;
use sitemeta::domain::TaxonomyKind;
use sitemeta::error::SiteMetaError;
use sitemeta::infrastructure::{ContentStore, FileSystemStore, SiteConfig};

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), SiteMetaError> {
    match cli.command {
        Commands::Init { path, name, url } => InitService::execute(&path, &name, &url),
        Commands::Config { key, value, list } => {
            let store = FileSystemStore::discover()?;
            let service = ConfigService::new(store);

            if list {
                let config = service.list()?;
                for key in SiteConfig::KEYS {
                    println!("{} = {}", key, config.get(key)?);
                }
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: sitemeta config [--list | <key> [<value>]]");
                println!("Run with --list to see the available keys");
                Ok(())
            }
        }
        Commands::List => {
            let store = FileSystemStore::discover()?;
            let posts = store.list_posts()?;
            print!("{}", output::format_post_list(&posts));
            Ok(())
        }
        Commands::Terms { command } => run_terms(command),
        Commands::Notices { post_id } => {
            let store = FileSystemStore::discover()?;
            let service = NoticesService::new(store);
            let notice = service.take(post_id)?;
            print!("{}", output::format_notice(notice.as_ref()));
            Ok(())
        }
        Commands::Head { post_id } => {
            let store = FileSystemStore::discover()?;
            let config = store.load_config()?;
            let service = HeadService::new(store, config);

            match service.execute(post_id)? {
                HeadOutput::Redirect { url, status } => {
                    println!("Redirect {} {}", status, url);
                }
                HeadOutput::Markup(markup) => {
                    print!("{}", markup);
                }
            }
            Ok(())
        }
        Commands::Sitemap { section } => {
            let store = FileSystemStore::discover()?;
            let config = store.load_config()?;
            let service = SitemapService::new(store, config);

            let xml = match section {
                Some(name) => service.section(&name)?,
                None => service.index()?,
            };
            print!("{}", xml);
            Ok(())
        }
        Commands::Breadcrumbs {
            post_id,
            category,
            tag,
            separator,
            no_home,
            no_current,
            json_ld,
        } => {
            let store = FileSystemStore::discover()?;
            let config = store.load_config()?;
            let service = BreadcrumbService::new(store, config);

            let options = BreadcrumbOptions {
                separator,
                show_home: !no_home,
                show_current: !no_current,
                ..BreadcrumbOptions::default()
            };

            let crumbs = if let Some(id) = post_id {
                service.trail_for_post(id, &options)?
            } else if let Some(slug) = category {
                service.trail_for_term(&slug, TaxonomyKind::Category, &options)?
            } else if let Some(slug) = tag {
                service.trail_for_term(&slug, TaxonomyKind::Tag, &options)?
            } else {
                println!("Usage: sitemeta breadcrumbs [<post_id> | --category <slug> | --tag <slug>]");
                return Ok(());
            };

            println!("{}", render_html(&crumbs, &options));
            if json_ld {
                print!("{}", schema::render_json_ld(&schema::breadcrumb_list(&crumbs)));
            }
            Ok(())
        }
    }
}

fn run_terms(command: TermsCommands) -> Result<(), SiteMetaError> {
    match command {
        TermsCommands::Apply {
            post_id,
            categories,
            tags,
            replace_categories,
            replace_tags,
            no_auto_create,
            json,
        } => {
            let store = FileSystemStore::discover()?;
            let mut service = ApplyTermsService::new(store);

            let application = service.execute(ApplyTermsOptions {
                post_id,
                categories,
                tags,
                replace_categories,
                replace_tags,
                auto_create: !no_auto_create,
            })?;

            if json {
                println!("{}", serde_json::to_string_pretty(&application.envelope())?);
            } else {
                print!("{}", output::format_application(&application));
            }
            Ok(())
        }
        TermsCommands::List => {
            let store = FileSystemStore::discover()?;
            let terms = store.all_terms()?;
            print!("{}", output::format_term_list(&terms));
            Ok(())
        }
    }
}
