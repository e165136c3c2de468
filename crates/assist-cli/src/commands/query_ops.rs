use assist_engine::assist_core::settings::Settings;
use assist_engine::HttpSuggestionClient;

use super::die;

pub fn typo(settings: &Settings, word: &str, json: bool) {
    let client = HttpSuggestionClient::from_settings(settings);
    let items = die!(client.try_typo_corrections(word), "Error: {}");
    if json {
        println!("{}", die!(serde_json::to_string_pretty(&items), "Error: {}"));
        return;
    }
    if items.is_empty() {
        println!("(no corrections for {word:?})");
    }
    for (i, item) in items.iter().enumerate() {
        let cost = item.cost.map(|c| format!("{c}")).unwrap_or_else(|| "-".into());
        let score = item.score.map(|s| format!("{s:.4}")).unwrap_or_else(|| "-".into());
        println!("{:>3}. {:<24} cost={cost} score={score}", i + 1, item.word);
    }
}

pub fn complete(settings: &Settings, prefix: &str, json: bool) {
    let client = HttpSuggestionClient::from_settings(settings);
    let items = die!(client.try_autocomplete(prefix), "Error: {}");
    if json {
        println!("{}", die!(serde_json::to_string_pretty(&items), "Error: {}"));
        return;
    }
    if items.is_empty() {
        println!("(no completions for {prefix:?})");
    }
    for (i, item) in items.iter().enumerate() {
        match item.frequency {
            Some(f) => println!("{:>3}. {:<24} freq={f}", i + 1, item.word),
            None => println!("{:>3}. {}", i + 1, item.word),
        }
    }
}
