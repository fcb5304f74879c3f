// Prompt text for problem categorization.
// The category list must stay in sync with `categorization::directory::CATEGORIES`.

/// Instruction block prepended to every user problem.
pub const CATEGORIZE_SYSTEM: &str = "\
You are an AI assistant that categorizes user-submitted problems into predefined categories.

### Instructions:
1. **Read the problem description** carefully and determine the most relevant category.
2. **Return only the category name(s)**, separated by commas if there are multiple relevant categories, without any explanations or extra text.
3. If the problem fits multiple categories, choose the most specific one.
4. If no category fits, return \"Uncategorized\".

### Available Categories:
- Software Development
- Hardware Issues
- Networking & Security
- AI & Machine Learning
- Business & Management
- Education & Tutoring
- Healthcare & Medicine
- Legal & Compliance
- Finance & Accounting
- Uncategorized (if none apply)
";

/// Builds the single-shot prompt sent to the backend for one problem description.
pub fn build_categorize_prompt(description: &str) -> String {
    format!("{CATEGORIZE_SYSTEM}\n\nUser Problem: {description}\nCategory:")
}
