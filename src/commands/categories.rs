//! List the categories of a word store

use crate::wordlists::WordStore;

/// Name and word count of each category, in source order
#[must_use]
pub fn category_summary(store: &WordStore) -> Vec<(String, usize)> {
    store
        .categories()
        .iter()
        .map(|c| (c.name.clone(), c.words.len()))
        .collect()
}

/// Print the categories with their word counts
pub fn print_categories(store: &WordStore) {
    use colored::Colorize;

    if store.is_empty() {
        println!("{}", "No categories found in the word list.".red());
        return;
    }

    let summary = category_summary(store);
    let width = summary.iter().map(|(name, _)| name.len()).max().unwrap_or(0);

    println!("\n{}", "Categories".bright_cyan().bold());
    println!("{}", "─".repeat(width + 12).cyan());
    for (name, count) in &summary {
        println!("  {}  {count:>4} words", format!("{name:<width$}").blue());
    }
    println!("{}", "─".repeat(width + 12).cyan());
    println!("  {:<width$}  {:>4} words\n", "Total", store.word_count());
}
