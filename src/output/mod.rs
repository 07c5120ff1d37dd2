// Output formatting: terminal display of the summary report.

pub mod terminal;
