use clap::Parser;
use ketban::colors::ColorScheme;
use ketban::{AppError, Args, CURRENT_USER_ID, KetbanApp, current_user_record, display, logging};
use ketban_core::{Profile, RecommendationConfig, recommend};

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    if let Err(error) = run(args) {
        eprintln!("❌ Error: {}", error);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let colors = ColorScheme::new(!args.no_color);
    let app = KetbanApp::new(&args)?;
    let mut graph = app.build_graph()?;

    let current_user = Profile::from_record(&current_user_record(&args), app.resolver());
    display::display_session_info(&current_user, &graph, &colors);
    graph.insert(current_user)?;

    let config = RecommendationConfig::new(args.limit, args.max_depth);
    let recommendations = recommend(&graph, CURRENT_USER_ID, &config);

    display::display_recommendations(&recommendations, &graph, CURRENT_USER_ID, &args, &colors);
    Ok(())
}
