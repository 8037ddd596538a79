//! Deterministic keyword classifier mapping free transaction text to a
//! spending category. No LLM involved; an ordered substring scan covers
//! the common merchants and verbs.

/// Ordered keyword → category mapping.
///
/// Position is the tie-break: the first listed keyword found anywhere in
/// the input wins, regardless of where the keywords sit in the text.
/// Iteration order is part of the contract; keep this a slice, never an
/// unordered map, and do not reorder casually.
pub const DEFAULT_RULES: &[(&str, &str)] = &[
    // Food & dining
    ("zomato", "Food"),
    ("swiggy", "Food"),
    ("restaurant", "Food"),
    ("dhabha", "Food"),
    ("cafe", "Food"),
    ("hotel", "Food"),
    ("sweets", "Food"),
    ("tea stall", "Food"),
    // Travel & transport
    ("uber", "Transport"),
    ("ola", "Transport"),
    ("fastag", "Transport"),
    ("irctc", "Transport"),
    ("metro", "Transport"),
    ("petrol", "Transport"),
    ("fuel", "Transport"),
    // Healthcare
    ("hospital", "Healthcare"),
    ("clinic", "Healthcare"),
    ("pharmacy", "Healthcare"),
    ("medical", "Healthcare"),
    // Recharge & utilities
    ("recharge", "Recharge"),
    ("prepaid", "Recharge"),
    ("jio", "Recharge"),
    ("airtel", "Recharge"),
    ("electricity", "Utilities"),
    ("water", "Utilities"),
    ("gas", "Utilities"),
    // Income (listed before financial services so that salary credits
    // and incoming transfers are not swallowed by broader keywords)
    ("salary", "Income"),
    ("credited", "Income"),
    ("received", "Income"),
    // Financial services
    ("simpl", "Buy Now Pay Later"),
    ("loan", "Loans"),
    ("emi", "Loans"),
    ("groww", "Financial Services"),
    ("cashfree", "Financial Services"),
    // Transfers
    ("transfer", "Transfer"),
    ("self", "Transfer"),
    ("own account", "Transfer"),
    // Shopping
    ("amazon", "Shopping"),
    ("flipkart", "Shopping"),
    ("myntra", "Shopping"),
    ("reliance", "Shopping"),
    ("retail", "Shopping"),
    // Education
    ("school", "Education"),
    ("college", "Education"),
    ("tuition", "Education"),
    // Investment & insurance
    ("insurance", "Insurance"),
    ("mutual fund", "Investment"),
    ("sip", "Investment"),
    // Entertainment
    ("dream11", "Entertainment"),
    ("my11circle", "Entertainment"),
    ("games", "Entertainment"),
    // Bank & misc
    ("refund", "Banking"),
    ("bank", "Banking"),
    ("upi", "Banking"),
    ("subscription", "Subscription"),
    ("donation", "Donation"),
    ("foundation", "Donation"),
];

/// Category of `text` under `rules`: lowercase the input and return the
/// category of the first rule whose keyword occurs as a substring, or
/// "Other" when nothing matches. Pure function; same input and rules
/// always yield the same label.
pub fn categorize_with(rules: &[(&str, &str)], text: &str) -> String {
    let haystack = text.to_lowercase();
    for (keyword, category) in rules {
        if haystack.contains(keyword) {
            return (*category).to_string();
        }
    }
    "Other".to_string()
}

/// Category of `text` under the default consolidated mapping.
pub fn categorize(text: &str) -> String {
    categorize_with(DEFAULT_RULES, text)
}
