/// Name of a semantic category in the vocabulary store.
/// Examples: `reports`, `invoices`, `screenshots`
pub type CategoryName = &'static str;
/// A base term belonging to a category.
/// Examples: `quarterly_report`, `receipt`, `screengrab`
pub type Term = &'static str;
/// Immutable list of terms or modifier values.
/// Example: `&["q1", "q2", "q3", "q4"]`
pub type WordList = &'static [Term];
/// A fully assembled filename stem (no extension, no path separators).
/// Examples: `acme_invoice_2021-03-14`, `photo_0042`, `my_resume`
pub type Filename = String;
