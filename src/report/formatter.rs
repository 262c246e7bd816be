// SPDX-License-Identifier: PMPL-1.0-or-later

//! Terminal rendering for every subcommand.

use crate::catalog::documents::{Country, Document, ResidenceStatus};
use crate::catalog::interview::Flashcard;
use crate::catalog::offices::{LegalOffice, Prefecture};
use crate::catalog::steps::STEPS;
use crate::catalog::templates::{TranslationTemplate, FAQ};
use crate::diagnosis::{Evaluation, Tier, QUESTION_COUNT, QUESTION_KEYS};
use crate::i18n::{self, Key, Lang};
use crate::reminders::{ReminderStats, Window};
use crate::store::{DataStore, Reminder, UserProfile};
use chrono::{DateTime, Utc};
use colored::*;

pub struct ReportFormatter {
    lang: Lang,
}

impl ReportFormatter {
    pub fn new(lang: Lang) -> Self {
        Self { lang }
    }

    fn t(&self, key: Key) -> &'static str {
        i18n::resolve(self.lang, key)
    }

    fn percent(&self, value: u8) -> String {
        i18n::resolve_args(self.lang, Key::PercentageFormat, &[&value.to_string()])
    }

    // ─── Diagnosis ──────────────────────────────────────────────────

    pub fn print_diagnosis(&self, answers: &[Option<bool>; QUESTION_COUNT], eval: &Evaluation) {
        println!("\n{}", self.t(Key::DiagnosisTitle).bold().cyan());
        println!();

        let tier_color = match eval.tier {
            Tier::Eligible => "green",
            Tier::PossibleEligibility => "yellow",
            Tier::InsufficientEligibility => "red",
        };
        println!(
            "  {}: {}  {}",
            self.t(Key::Result),
            self.percent(eval.percentage).color(tier_color).bold(),
            self.t(eval.tier.key()).color(tier_color).bold()
        );
        println!();

        println!("  {}", self.t(Key::DetailedResult).bold().yellow());
        for (i, &question) in QUESTION_KEYS.iter().enumerate() {
            let mark = match answers[i] {
                Some(true) => "+".green().bold(),
                Some(false) => "x".red().bold(),
                None => "-".dimmed(),
            };
            println!("    {:>2}. [{}] {}", i + 1, mark, self.t(question));
        }
        println!();

        println!("  {}", self.t(Key::NextSteps).bold().yellow());
        for (i, rec) in eval.recommendations.iter().enumerate() {
            println!("    {}. {}", i + 1, self.t(rec.title).bold());
            println!("       {}", self.t(rec.description).dimmed());
        }
        println!();
    }

    // ─── Document checklist ─────────────────────────────────────────

    pub fn print_documents(
        &self,
        rows: &[&Document],
        country: Country,
        status: ResidenceStatus,
    ) {
        println!("\n{}", self.t(Key::DocumentChecklist).bold().cyan());
        println!(
            "  {}: {}  |  {}: {}",
            self.t(Key::SelectCountry),
            self.t(country.key()).bold(),
            self.t(Key::SelectStatus),
            self.t(status.key()).bold()
        );
        println!();

        if rows.is_empty() {
            println!("  {}", self.t(Key::NoDocumentsFound).dimmed());
            return;
        }
        for (i, doc) in rows.iter().enumerate() {
            let priority = self.t(doc.priority.key());
            let priority = match doc.priority {
                crate::types::Priority::High => priority.red(),
                crate::types::Priority::Medium => priority.yellow(),
                crate::types::Priority::Low => priority.green(),
            };
            println!("  {:>2}. {} [{}]", i + 1, self.t(doc.name).bold(), priority);
        }
        println!();
    }

    // ─── Legal offices ──────────────────────────────────────────────

    pub fn print_offices(&self, offices: &[&LegalOffice], prefecture: Prefecture, query: &str) {
        println!("\n{}", self.t(Key::LegalOfficeSearch).bold().cyan());
        print!(
            "  {}: {}",
            self.t(Key::Prefecture),
            self.t(prefecture.key()).bold()
        );
        if !query.trim().is_empty() {
            print!("  |  \"{}\"", query.trim());
        }
        println!();
        println!();

        if offices.is_empty() {
            println!("  {}", self.t(Key::NoLegalOfficeFound).dimmed());
            println!("  {}", self.t(Key::TryDifferentSearch).dimmed());
            return;
        }
        for office in offices {
            println!("  {}", self.t(office.name).bold());
            println!("    {}: {}", self.t(Key::Address), office.address);
            println!("    {}: {}", self.t(Key::PhoneNumber), office.phone);
            println!("    {}: {}", self.t(Key::BusinessHours), office.hours);
            println!(
                "    {}: {}",
                self.t(Key::ConsultationDays),
                self.t(office.consultation_days)
            );
            let services: Vec<&str> = office.services.iter().map(|&s| self.t(s)).collect();
            println!("    {}", services.join(" / ").dimmed());
            println!();
        }
    }

    // ─── Interview flashcards ───────────────────────────────────────

    pub fn print_flashcards(&self, cards: &[&Flashcard]) {
        println!("\n{}", self.t(Key::InterviewPreparation).bold().cyan());
        println!();

        if cards.is_empty() {
            println!("  {}", self.t(Key::NoQuestionsFound).dimmed());
            return;
        }
        for card in cards {
            println!(
                "  {:>2}. [{}] [{}] {}",
                card.number,
                self.t(card.category.key()),
                self.t(card.difficulty.key()).yellow(),
                self.t(card.question).bold()
            );
            println!(
                "      {}: {}",
                self.t(Key::SampleAnswer),
                self.t(card.sample_answer)
            );
            println!(
                "      {}: {}",
                self.t(Key::TipsAndNotes),
                self.t(card.tips).dimmed()
            );
            println!();
        }
    }

    // ─── Step guide ─────────────────────────────────────────────────

    pub fn print_steps(&self, completed: &[u8], current: u8) {
        println!("\n{}", self.t(Key::StepGuide).bold().cyan());
        println!(
            "  {}: {}/{} {}",
            self.t(Key::ProgressStatus),
            completed.len(),
            STEPS.len(),
            self.t(Key::StepCompleted)
        );
        println!();

        for step in STEPS {
            let mark = if completed.contains(&step.number) {
                "+".green().bold()
            } else if step.number == current {
                ">".cyan().bold()
            } else {
                " ".normal()
            };
            println!("  [{}] {}. {}", mark, step.number, self.t(step.title).bold());
            println!("         {}", self.t(step.description).dimmed());
        }
        println!();
    }

    // ─── Translation templates ──────────────────────────────────────

    pub fn print_template(&self, template: &TranslationTemplate) {
        println!("\n{}", self.t(Key::TranslationSupport).bold().cyan());
        println!();
        println!("  {}", self.t(template.document.key()).bold());
        println!();
        println!("  {}", self.t(Key::OriginalText).bold().yellow());
        for line in template.template.lines() {
            println!("    {line}");
        }
        println!();
        println!("  {}", self.t(Key::TranslatedText).bold().yellow());
        for line in template.sample_translation.lines() {
            println!("    {line}");
        }
        println!();
        println!("  {}", self.t(Key::Faq).bold().yellow());
        for &(q, a) in FAQ {
            println!("    {}", self.t(q).bold());
            println!("      {}", self.t(a).dimmed());
        }
        println!();
    }

    // ─── Reminders ──────────────────────────────────────────────────

    pub fn print_reminders(
        &self,
        items: &[&Reminder],
        stats: ReminderStats,
        window: Window,
        now: DateTime<Utc>,
    ) {
        println!("\n{}", self.t(Key::NotificationDeadlineManagement).bold().cyan());
        println!(
            "  {}: {}  |  {}: {}  |  {}: {}",
            self.t(Key::All),
            stats.total,
            self.t(Key::Done),
            stats.completed.to_string().green(),
            self.t(Key::Overdue),
            stats.overdue.to_string().red()
        );
        println!("  [{}]", self.t(window.key()));
        println!();

        if items.is_empty() {
            let message = match window {
                Window::All => Key::NoReminders,
                _ => Key::NoMatchingReminders,
            };
            println!("  {}", self.t(message).dimmed());
            return;
        }
        for reminder in items {
            let mark = if reminder.is_completed {
                "+".green().bold()
            } else {
                " ".normal()
            };
            println!(
                "  [{}] {}  ({})",
                mark,
                reminder.title.bold(),
                reminder.id.to_string().dimmed()
            );
            if !reminder.description.is_empty() {
                println!("      {}", reminder.description.dimmed());
            }
            let due = match (reminder.due_date - now).num_days() {
                days if days > 0 && !reminder.is_completed => format!(
                    "{} ({})",
                    reminder.due_date.format("%Y-%m-%d %H:%M"),
                    i18n::resolve_args(self.lang, Key::DaysLater, &[&days.to_string()])
                ),
                days if days < 0 && !reminder.is_completed => format!(
                    "{} ({})",
                    reminder.due_date.format("%Y-%m-%d %H:%M"),
                    self.t(Key::Overdue)
                ),
                _ => reminder.due_date.format("%Y-%m-%d %H:%M").to_string(),
            };
            println!(
                "      {}: {}  |  {}: {}  |  {}: {}",
                self.t(Key::Deadline),
                due,
                self.t(Key::Priority),
                self.t(reminder.priority.key()),
                self.t(Key::Category),
                self.t(reminder.category.key())
            );
        }
        println!();
    }

    // ─── Profile & statistics ───────────────────────────────────────

    pub fn print_profile(&self, profile: &UserProfile) {
        println!("\n{}", self.t(Key::BasicInfo).bold().cyan());
        let name = if profile.name.is_empty() {
            "-"
        } else {
            profile.name.as_str()
        };
        let nationality = if profile.nationality.is_empty() {
            "-"
        } else {
            profile.nationality.as_str()
        };
        println!("  {name}  ({nationality})");
        if !profile.residence_status.is_empty() {
            println!("  {}", profile.residence_status);
        }
        if profile.years_in_japan > 0 {
            println!("  {}y in Japan", profile.years_in_japan);
        }
        println!();
    }

    pub fn print_stats(&self, store: &DataStore) {
        println!();
        println!(
            "  {:<24} {}",
            "diagnosis results",
            store.diagnosis_results.len()
        );
        println!("  {:<24} {}", "saved documents", store.documents.len());
        println!("  {:<24} {}", "reminders", store.reminders.len());
        println!("  {:<24} {}", "notes", store.notes.len());
        println!(
            "  {:<24} {}",
            "completed steps",
            store.progress.completed_steps.len()
        );
        println!();
    }

    pub fn print_languages(&self, current: Lang) {
        println!();
        for &lang in Lang::all() {
            let marker = if lang == current { ">" } else { " " };
            println!(
                "  {} {} {:<8} {}",
                marker,
                lang.flag(),
                lang.code(),
                lang.display_name()
            );
        }
        println!();
    }
}
