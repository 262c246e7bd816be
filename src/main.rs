// SPDX-License-Identifier: PMPL-1.0-or-later

//! kika: naturalization application assistant
//!
//! A command-line companion for the Japanese naturalization procedure:
//! eligibility diagnosis, a filtered document checklist, the legal affairs
//! bureau directory, interview flashcards, the step guide, translation
//! templates, deadline reminders, and export/import of all local data.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use clap::{Parser, Subcommand};
use kika::catalog::documents::{self, Country, ResidenceStatus};
use kika::catalog::interview::{self, Category};
use kika::catalog::offices::{self, Prefecture};
use kika::catalog::templates::{self, TemplateDocument};
use kika::diagnosis::{self, Weights, QUESTION_COUNT};
use kika::export;
use kika::i18n::Lang;
use kika::reminders::{self, Window};
use kika::report::{save_record, ReportFormatter, ReportOutputFormat};
use kika::store::{DataStore, Note, Reminder, ReminderCategory};
use kika::types::Priority;
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "kika")]
#[command(version)]
#[command(about = "Naturalization application assistant")]
#[command(long_about = None)]
struct Cli {
    /// Data directory for persisted state
    #[arg(long, global = true, default_value = "kika-data")]
    data_dir: PathBuf,

    /// Display language (ja, en, zh-Hans, zh-Hant, vi, ko, fil, ne);
    /// overrides the saved preference
    #[arg(long, global = true)]
    lang: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score the 10-question eligibility questionnaire
    Diagnose {
        /// Comma-separated answers, one per question: y, n, or - (skipped)
        #[arg(short, long, value_name = "ANSWERS")]
        answers: String,

        /// Free-text notes stored with a saved result
        #[arg(long, default_value = "")]
        notes: String,

        /// Persist the result to the data store
        #[arg(long)]
        save: bool,

        /// Write the result to a file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// File format for --output
        #[arg(short, long, value_enum, default_value = "json")]
        format: ReportOutputFormat,
    },

    /// Show the document checklist for a country and residence status
    Documents {
        #[arg(short, long, value_enum)]
        country: CountryArg,

        #[arg(short, long, value_enum)]
        status: StatusArg,
    },

    /// Search the legal affairs bureau directory
    Offices {
        #[arg(short, long, value_enum)]
        prefecture: PrefectureArg,

        /// Case-insensitive substring match on office name or address
        #[arg(short, long, default_value = "")]
        query: String,
    },

    /// Browse interview flashcards
    Interview {
        /// Restrict to one category
        #[arg(short, long, value_enum)]
        category: Option<CategoryArg>,
    },

    /// Show the application step guide
    Steps {
        #[command(subcommand)]
        command: Option<StepsCommand>,
    },

    /// Show a translation template for a certificate
    Translate {
        #[arg(short, long, value_enum)]
        document: TemplateDocArg,
    },

    /// Manage deadline reminders
    Remind {
        #[command(subcommand)]
        command: RemindCommand,
    },

    /// Manage notes
    Note {
        #[command(subcommand)]
        command: NoteCommand,
    },

    /// Show or update the applicant profile
    Profile {
        #[command(subcommand)]
        command: Option<ProfileCommand>,
    },

    /// Show data statistics
    Stats,

    /// Show or set the display language preference
    Lang {
        /// Language code to persist; omit to list languages
        code: Option<String>,
    },

    /// Export all data to a JSON file
    Export {
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Import data from a previously exported JSON file
    Import {
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Delete all stored data
    Reset {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum StepsCommand {
    /// Toggle completion of a step
    Complete {
        #[arg(value_name = "STEP")]
        number: u8,
    },
    /// Set the current step
    Current {
        #[arg(value_name = "STEP")]
        number: u8,
    },
}

#[derive(Subcommand)]
enum RemindCommand {
    /// Add a reminder
    Add {
        title: String,

        #[arg(short, long, default_value = "")]
        description: String,

        /// Due date: YYYY-MM-DD or YYYY-MM-DDTHH:MM
        #[arg(long)]
        due: String,

        #[arg(long, value_enum, default_value = "medium")]
        priority: PriorityArg,

        #[arg(long, value_enum, default_value = "document-preparation")]
        category: ReminderCategoryArg,
    },
    /// List reminders
    List {
        #[arg(short, long, value_enum, default_value = "all")]
        window: WindowArg,
    },
    /// Toggle completion of a reminder
    Done { id: Uuid },
    /// Delete a reminder
    Delete { id: Uuid },
}

#[derive(Subcommand)]
enum NoteCommand {
    /// Add a note
    Add {
        title: String,

        #[arg(short, long, default_value = "")]
        content: String,

        #[arg(long, default_value = "")]
        category: String,

        #[arg(long)]
        important: bool,
    },
    /// List notes
    List,
    /// Delete a note
    Delete { id: Uuid },
}

#[derive(Subcommand)]
enum ProfileCommand {
    /// Update profile fields
    Set {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        nationality: Option<String>,

        #[arg(long)]
        residence_status: Option<String>,

        #[arg(long)]
        years_in_japan: Option<u32>,

        #[arg(long)]
        occupation: Option<String>,
    },
}

// CLI argument types

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CountryArg {
    China,
    Vietnam,
    Philippines,
    Nepal,
    Korea,
    Other,
}

impl From<CountryArg> for Country {
    fn from(arg: CountryArg) -> Self {
        match arg {
            CountryArg::China => Country::China,
            CountryArg::Vietnam => Country::Vietnam,
            CountryArg::Philippines => Country::Philippines,
            CountryArg::Nepal => Country::Nepal,
            CountryArg::Korea => Country::Korea,
            CountryArg::Other => Country::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum StatusArg {
    Worker,
    Student,
    TechnicalIntern,
    InternationalMarriage,
    PermanentResident,
}

impl From<StatusArg> for ResidenceStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Worker => ResidenceStatus::Worker,
            StatusArg::Student => ResidenceStatus::Student,
            StatusArg::TechnicalIntern => ResidenceStatus::TechnicalIntern,
            StatusArg::InternationalMarriage => ResidenceStatus::InternationalMarriage,
            StatusArg::PermanentResident => ResidenceStatus::PermanentResident,
        }
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum PrefectureArg {
    Hokkaido,
    Aomori,
    Miyagi,
    Tokyo,
    Kanagawa,
    Saitama,
}

impl From<PrefectureArg> for Prefecture {
    fn from(arg: PrefectureArg) -> Self {
        match arg {
            PrefectureArg::Hokkaido => Prefecture::Hokkaido,
            PrefectureArg::Aomori => Prefecture::Aomori,
            PrefectureArg::Miyagi => Prefecture::Miyagi,
            PrefectureArg::Tokyo => Prefecture::Tokyo,
            PrefectureArg::Kanagawa => Prefecture::Kanagawa,
            PrefectureArg::Saitama => Prefecture::Saitama,
        }
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CategoryArg {
    BasicInfo,
    Motivation,
    LifeWork,
    Family,
    Japanese,
    Other,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::BasicInfo => Category::BasicInfo,
            CategoryArg::Motivation => Category::MotivationReason,
            CategoryArg::LifeWork => Category::LifeWork,
            CategoryArg::Family => Category::FamilyRelatives,
            CategoryArg::Japanese => Category::JapaneseAbility,
            CategoryArg::Other => Category::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum WindowArg {
    All,
    Today,
    Week,
    Month,
    Expired,
}

impl From<WindowArg> for Window {
    fn from(arg: WindowArg) -> Self {
        match arg {
            WindowArg::All => Window::All,
            WindowArg::Today => Window::Today,
            WindowArg::Week => Window::ThisWeek,
            WindowArg::Month => Window::ThisMonth,
            WindowArg::Expired => Window::Expired,
        }
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum PriorityArg {
    Low,
    Medium,
    High,
}

impl From<PriorityArg> for Priority {
    fn from(arg: PriorityArg) -> Self {
        match arg {
            PriorityArg::Low => Priority::Low,
            PriorityArg::Medium => Priority::Medium,
            PriorityArg::High => Priority::High,
        }
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum ReminderCategoryArg {
    Consultation,
    DocumentPreparation,
    Application,
    Interview,
}

impl From<ReminderCategoryArg> for ReminderCategory {
    fn from(arg: ReminderCategoryArg) -> Self {
        match arg {
            ReminderCategoryArg::Consultation => ReminderCategory::Consultation,
            ReminderCategoryArg::DocumentPreparation => ReminderCategory::DocumentPreparation,
            ReminderCategoryArg::Application => ReminderCategory::Application,
            ReminderCategoryArg::Interview => ReminderCategory::Interview,
        }
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum TemplateDocArg {
    BirthCertificate,
    MarriageCertificate,
    NationalityCertificate,
    GraduationCertificate,
    EmploymentCertificate,
    TaxCertificate,
}

impl From<TemplateDocArg> for TemplateDocument {
    fn from(arg: TemplateDocArg) -> Self {
        match arg {
            TemplateDocArg::BirthCertificate => TemplateDocument::BirthCertificate,
            TemplateDocArg::MarriageCertificate => TemplateDocument::MarriageCertificate,
            TemplateDocArg::NationalityCertificate => TemplateDocument::NationalityCertificate,
            TemplateDocArg::GraduationCertificate => TemplateDocument::GraduationCertificate,
            TemplateDocArg::EmploymentCertificate => TemplateDocument::EmploymentCertificate,
            TemplateDocArg::TaxCertificate => TemplateDocument::TaxCertificate,
        }
    }
}

/// Parse the `--answers` vector: exactly one token per question.
fn parse_answers(input: &str) -> Result<[Option<bool>; QUESTION_COUNT]> {
    let tokens: Vec<&str> = input.split(',').map(str::trim).collect();
    if tokens.len() != QUESTION_COUNT {
        bail!(
            "expected {} comma-separated answers, got {}",
            QUESTION_COUNT,
            tokens.len()
        );
    }
    let mut answers = [None; QUESTION_COUNT];
    for (i, token) in tokens.iter().enumerate() {
        answers[i] = match token.to_ascii_lowercase().as_str() {
            "y" | "yes" | "true" | "1" => Some(true),
            "n" | "no" | "false" | "0" => Some(false),
            "-" | "" => None,
            other => bail!("invalid answer '{}' at position {}", other, i + 1),
        };
    }
    Ok(answers)
}

/// Parse a due date: `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM`, read as UTC.
fn parse_due(input: &str) -> Result<DateTime<Utc>> {
    if let Ok(datetime) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M") {
        return Ok(Utc.from_utc_datetime(&datetime));
    }
    let date = NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .with_context(|| format!("invalid due date '{input}'"))?;
    let midnight = date.and_hms_opt(0, 0, 0).context("invalid due date")?;
    Ok(Utc.from_utc_datetime(&midnight))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut store = DataStore::open(&cli.data_dir)?;

    let lang = match &cli.lang {
        Some(code) => {
            Lang::from_code(code).with_context(|| format!("unsupported language '{code}'"))?
        }
        None => store.language(),
    };
    let formatter = ReportFormatter::new(lang);

    match cli.command {
        Commands::Diagnose {
            answers,
            notes,
            save,
            output,
            format,
        } => {
            let answers = parse_answers(&answers)?;
            let evaluation = diagnosis::evaluate(&answers, &Weights::default());
            formatter.print_diagnosis(&answers, &evaluation);

            if save || output.is_some() {
                let record = diagnosis::into_record(&evaluation, &answers, lang, notes);
                if let Some(path) = &output {
                    save_record(&record, path, format)?;
                    println!("Report saved to: {}", path.display());
                }
                if save {
                    store.add_diagnosis_result(record)?;
                }
            }
        }

        Commands::Documents { country, status } => {
            let country = Country::from(country);
            let status = ResidenceStatus::from(status);
            let rows = documents::filter(country, status);
            formatter.print_documents(&rows, country, status);
        }

        Commands::Offices { prefecture, query } => {
            let prefecture = Prefecture::from(prefecture);
            let hits = offices::search(prefecture, &query, lang);
            formatter.print_offices(&hits, prefecture, &query);
        }

        Commands::Interview { category } => {
            let cards = match category {
                Some(arg) => interview::by_category(Category::from(arg)),
                None => interview::FLASHCARDS.iter().collect(),
            };
            formatter.print_flashcards(&cards);
        }

        Commands::Steps { command } => {
            match command {
                Some(StepsCommand::Complete { number }) => {
                    let mut progress = store.progress.clone();
                    if let Some(pos) = progress.completed_steps.iter().position(|&n| n == number)
                    {
                        progress.completed_steps.remove(pos);
                    } else {
                        progress.completed_steps.push(number);
                    }
                    progress.last_updated = Some(Utc::now());
                    store.update_progress(progress)?;
                }
                Some(StepsCommand::Current { number }) => {
                    let mut progress = store.progress.clone();
                    progress.current_step = number;
                    progress.last_updated = Some(Utc::now());
                    store.update_progress(progress)?;
                }
                None => {}
            }
            formatter.print_steps(&store.progress.completed_steps, store.progress.current_step);
        }

        Commands::Translate { document } => {
            let template = templates::template_for(TemplateDocument::from(document));
            formatter.print_template(template);
        }

        Commands::Remind { command } => match command {
            RemindCommand::Add {
                title,
                description,
                due,
                priority,
                category,
            } => {
                let reminder = Reminder {
                    id: Uuid::new_v4(),
                    title,
                    description,
                    due_date: parse_due(&due)?,
                    priority: priority.into(),
                    category: category.into(),
                    is_completed: false,
                };
                let id = reminder.id;
                store.add_reminder(reminder)?;
                println!("Added reminder {id}");
            }
            RemindCommand::List { window } => {
                let window = Window::from(window);
                let now = Utc::now();
                let items = reminders::filter_by_window(&store.reminders, window, now);
                let stats = reminders::stats(&store.reminders, now);
                formatter.print_reminders(&items, stats, window, now);
            }
            RemindCommand::Done { id } => match store.toggle_reminder(id)? {
                Some(true) => println!("Reminder {id} completed"),
                Some(false) => println!("Reminder {id} reopened"),
                None => bail!("no reminder with id {id}"),
            },
            RemindCommand::Delete { id } => {
                if !store.delete_reminder(id)? {
                    bail!("no reminder with id {id}");
                }
                println!("Reminder {id} deleted");
            }
        },

        Commands::Note { command } => match command {
            NoteCommand::Add {
                title,
                content,
                category,
                important,
            } => {
                let now = Utc::now();
                let note = Note {
                    id: Uuid::new_v4(),
                    title,
                    content,
                    category,
                    tags: Vec::new(),
                    created_at: now,
                    updated_at: now,
                    is_important: important,
                };
                let id = note.id;
                store.add_note(note)?;
                println!("Added note {id}");
            }
            NoteCommand::List => {
                println!();
                for note in &store.notes {
                    let marker = if note.is_important { "*" } else { " " };
                    println!("  {} {}  ({})", marker, note.title, note.id);
                }
                println!();
            }
            NoteCommand::Delete { id } => {
                store.delete_note(id)?;
                println!("Note {id} deleted");
            }
        },

        Commands::Profile { command } => {
            if let Some(ProfileCommand::Set {
                name,
                nationality,
                residence_status,
                years_in_japan,
                occupation,
            }) = command
            {
                let mut profile = store.profile.clone();
                if let Some(name) = name {
                    profile.name = name;
                }
                if let Some(nationality) = nationality {
                    profile.nationality = nationality;
                }
                if let Some(residence_status) = residence_status {
                    profile.residence_status = residence_status;
                }
                if let Some(years) = years_in_japan {
                    profile.years_in_japan = years;
                }
                if let Some(occupation) = occupation {
                    profile.occupation = occupation;
                }
                if profile.created_at.is_none() {
                    profile.created_at = Some(Utc::now());
                }
                profile.updated_at = Some(Utc::now());
                store.update_profile(profile)?;
            }
            formatter.print_profile(&store.profile);
        }

        Commands::Stats => {
            formatter.print_stats(&store);
        }

        Commands::Lang { code } => match code {
            Some(code) => {
                let lang = Lang::from_code(&code)
                    .with_context(|| format!("unsupported language '{code}'"))?;
                store.set_language(lang)?;
                let mut profile = store.profile.clone();
                profile.preferred_language = lang.display_name().to_string();
                store.update_profile(profile)?;
                formatter.print_languages(lang);
            }
            None => formatter.print_languages(store.language()),
        },

        Commands::Export { output } => {
            let json = export::export_json(&store)?;
            std::fs::write(&output, json)
                .with_context(|| format!("writing export {}", output.display()))?;
            println!("Data exported to: {}", output.display());
        }

        Commands::Import { input } => {
            let json = std::fs::read_to_string(&input)
                .with_context(|| format!("reading import {}", input.display()))?;
            export::import_json(&mut store, &json)?;
            println!("Data imported from: {}", input.display());
        }

        Commands::Reset { yes } => {
            if !yes {
                bail!("pass --yes to confirm deleting all stored data");
            }
            store.clear_all()?;
            println!("All data cleared");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_parse_all_token_forms() {
        let parsed = parse_answers("y,n,-,YES,No,true,0,1,-,n").unwrap();
        assert_eq!(parsed[0], Some(true));
        assert_eq!(parsed[1], Some(false));
        assert_eq!(parsed[2], None);
        assert_eq!(parsed[3], Some(true));
        assert_eq!(parsed[6], Some(false));
        assert_eq!(parsed[7], Some(true));
    }

    #[test]
    fn answers_reject_wrong_count_and_bad_tokens() {
        assert!(parse_answers("y,n").is_err());
        assert!(parse_answers("y,n,maybe,y,n,y,n,y,n,y").is_err());
    }

    #[test]
    fn due_dates_parse_with_and_without_time() {
        assert_eq!(
            parse_due("2025-07-01").unwrap(),
            Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(
            parse_due("2025-07-01T09:30").unwrap(),
            Utc.with_ymd_and_hms(2025, 7, 1, 9, 30, 0).unwrap()
        );
        assert!(parse_due("July 1").is_err());
    }
}
