use ketban_core::{Algorithm, MISSING, Profile, ProfileId, Recommendations, ScoredProfile, SocialGraph};

use crate::args::Args;
use crate::colors::ColorScheme;

const RULE_WIDTH: usize = 60;
const PROFILE_RULE_WIDTH: usize = 45;

pub fn display_session_info(user: &Profile, graph: &SocialGraph, colors: &ColorScheme) {
    println!(
        "👤 Finding friends for {} among {} profiles",
        colors.person_name(&format!("\"{}\"", user.name)),
        colors.score(&graph.len().to_string())
    );
    println!("🔍 Searching...");
}

pub fn display_recommendations(
    recommendations: &Recommendations,
    graph: &SocialGraph,
    user_id: &str,
    args: &Args,
    colors: &ColorScheme,
) {
    display_section(
        &format!("TOP {} SUGGESTIONS", args.limit),
        &recommendations.combined,
        graph,
        user_id,
        colors,
    );

    match &recommendations.top_match {
        Some(top_match) => {
            println!("\n{}", colors.heading(&banner("BEST MATCH (TOP-1)", '!')));
            print_lines(format_profile("TOP-1", top_match, graph, user_id, colors));
            display_path(
                top_match,
                recommendations.path_to_top_match.as_deref(),
                graph,
                colors,
            );
        }
        None => println!("\n{}", colors.error("❌ No suggestions found")),
    }

    display_statistics(recommendations, args, colors);

    if !args.quiet {
        for algorithm in args.detail_algorithms() {
            display_section(
                &format!("TOP {} FROM {}", args.limit, search_title(algorithm)),
                recommendations.ranked_by(algorithm),
                graph,
                user_id,
                colors,
            );
        }
    }
}

fn search_title(algorithm: Algorithm) -> &'static str {
    match algorithm {
        Algorithm::Bfs => "BREADTH-FIRST SEARCH",
        Algorithm::Dfs => "DEPTH-FIRST SEARCH",
    }
}

fn display_section(
    title: &str,
    results: &[ScoredProfile],
    graph: &SocialGraph,
    user_id: &str,
    colors: &ColorScheme,
) {
    println!("\n{}", colors.heading(&banner(title, '=')));

    for (index, scored) in results.iter().enumerate() {
        let label = (index + 1).to_string();
        print_lines(format_profile(&label, scored, graph, user_id, colors));
    }
}

fn display_path(
    top_match: &ScoredProfile,
    path: Option<&[ProfileId]>,
    graph: &SocialGraph,
    colors: &ColorScheme,
) {
    println!("\n🧭 Path to the best match:");
    match path {
        Some(path) => {
            let hop_count = path.len().saturating_sub(1);
            println!("{}", format_path(path, graph, colors));
            println!(
                "{} {} hop(s)",
                colors.success("✅"),
                colors.score(&hop_count.to_string())
            );
        }
        None => println!(
            "{} {}",
            colors.error("❌ No path found to"),
            colors.person_name(&format!("\"{}\"", top_match.profile.name))
        ),
    }
}

fn display_statistics(recommendations: &Recommendations, args: &Args, colors: &ColorScheme) {
    println!("\n---\n");
    if args.verbose {
        for algorithm in [Algorithm::Bfs, Algorithm::Dfs] {
            println!(
                "{} {} visited {} profiles",
                colors.stats("📊"),
                algorithm.as_str().to_uppercase(),
                colors.score(
                    &recommendations
                        .stats_for(algorithm)
                        .profiles_visited
                        .to_string()
                )
            );
        }
    }
    println!("{}", format_duration(recommendations.duration_ms, colors));
}

pub fn format_duration(duration_ms: u64, colors: &ColorScheme) -> String {
    format!(
        "{} Finished in {} sec",
        colors.stats("⏱️ "),
        colors.score(&format!("{:.3}", duration_ms as f64 / 1000.0))
    )
}

/// Card for one suggestion: header with the score, the profile's fields and
/// the friends it shares with the current user.
pub fn format_profile(
    label: &str,
    scored: &ScoredProfile,
    graph: &SocialGraph,
    user_id: &str,
    colors: &ColorScheme,
) -> Vec<String> {
    let profile = scored.profile;
    let mutual_names: Vec<&str> = graph
        .mutual_connections(user_id, profile.id())
        .into_iter()
        .map(|friend| friend.name.as_str())
        .collect();

    vec![
        String::new(),
        format!(
            "{} {} {}",
            colors.rank_number(&format!("{label}.")),
            colors.person_name(&profile.name.to_uppercase()),
            colors.score(&format!("(+{})", scored.score))
        ),
        format!("{} {}", colors.label("Born:"), profile.birth_date),
        format!("{} {}", colors.label("Gender:"), profile.gender),
        format!("{} {}", colors.label("Location:"), profile.location),
        format!(
            "{} {} (Category: {})",
            colors.label("Profession:"),
            profile.profession(),
            profile.profession_category()
        ),
        format!(
            "{} {}",
            colors.label("Interests:"),
            join_or_missing(profile.interests().iter().map(String::as_str))
        ),
        format!("{} {}", colors.label("Marital status:"), profile.marital_status),
        format!(
            "{} {}",
            colors.label("Mutual friends:"),
            join_or_missing(mutual_names)
        ),
        "-".repeat(PROFILE_RULE_WIDTH),
    ]
}

/// Names along the path joined by arrows; unknown ids are shown as-is.
pub fn format_path(path: &[ProfileId], graph: &SocialGraph, colors: &ColorScheme) -> String {
    path.iter()
        .map(|id| {
            let name = graph.profile(id).map_or(id.as_str(), |profile| profile.name.as_str());
            colors.person_name(&format!("\"{}\"", name)).to_string()
        })
        .collect::<Vec<_>>()
        .join(" → ")
}

fn join_or_missing<'a>(items: impl IntoIterator<Item = &'a str>) -> String {
    let joined = items.into_iter().collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        MISSING.to_string()
    } else {
        joined
    }
}

fn banner(title: &str, fill: char) -> String {
    let rule = fill.to_string().repeat(RULE_WIDTH);
    format!("{rule}\n {title}\n{rule}")
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{}", line);
    }
}
