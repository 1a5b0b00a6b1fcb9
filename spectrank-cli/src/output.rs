/// Output formatting: terminal tables and JSON.
use serde::Serialize;

#[derive(Serialize)]
struct JsonBordaItem {
    rank: usize,
    name: String,
    wins: u64,
}

#[derive(Serialize)]
struct JsonCentralityItem {
    rank: usize,
    name: String,
    score: f64,
}

#[derive(Serialize)]
struct JsonOutput {
    borda: Vec<JsonBordaItem>,
    rank_centrality: Vec<JsonCentralityItem>,
    items: usize,
    rankings: usize,
}

/// Print both scoreboards as formatted terminal tables.
pub fn print_tables(borda: &[(String, u64)], centrality: &[(String, f64)], rankings: usize) {
    // Find the widest item name for padding
    let name_width = borda.iter()
        .map(|(name, _)| name.len())
        .max()
        .unwrap_or(4)
        .max(4); // at least "Item"

    println!("Borda count:");
    println!(" # | {:<name_width$} |  Wins", "Item");
    println!("---|-{}-|------", "-".repeat(name_width));
    for (i, (name, wins)) in borda.iter().enumerate() {
        println!("{:>2} | {:<name_width$} | {:>5}", i + 1, name, wins);
    }

    println!();
    println!("Rank centrality:");
    println!(" # | {:<name_width$} |  Score", "Item");
    println!("---|-{}-|--------", "-".repeat(name_width));
    for (i, (name, score)) in centrality.iter().enumerate() {
        println!("{:>2} | {:<name_width$} | {:>6.2}", i + 1, name, score);
    }

    println!("\n{} items scored from {} rankings", borda.len(), rankings);
}

/// Print both scoreboards as JSON.
pub fn print_json(borda: &[(String, u64)], centrality: &[(String, f64)], rankings: usize) {
    let output = JsonOutput {
        borda: borda
            .iter()
            .enumerate()
            .map(|(i, (name, wins))| JsonBordaItem { rank: i + 1, name: name.clone(), wins: *wins })
            .collect(),
        rank_centrality: centrality
            .iter()
            .enumerate()
            .map(|(i, (name, score))| JsonCentralityItem {
                rank: i + 1,
                name: name.clone(),
                score: *score,
            })
            .collect(),
        items: borda.len(),
        rankings,
    };

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}
