//! doc-init's main application entry point and orchestration logic.
//! Handles command-line argument parsing and drives load, validate,
//! preview and build in that order.

use std::io::{self, IsTerminal};

use doc_init::{
    builder::StructureBuilder,
    cli::{get_args, Args},
    config::ConfigLoader,
    error::{default_error_handler, Result},
    generators::ContentGenerator,
    layout::Plan,
    logger::init_logger,
    preview::{DisplayOptions, StructurePreview},
    prompt::{ConfirmOptions, Confirmation, DialoguerPrompter, Prompter, ReaderPrompter},
    validator::ConfigValidator,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    let display = args.display_options();
    if let Err(err) = run(args, display) {
        default_error_handler(err, &display);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads the YAML outline and the imports template
/// 2. Validates the outline, reporting every problem at once
/// 3. Loads custom imports declared by the outline
/// 4. Previews the planned tree and asks for confirmation
/// 5. Builds the tree
fn run(args: Args, display: DisplayOptions) -> Result<()> {
    let loader = ConfigLoader::new(&args.config_path);

    let config_path = args.config_path.display();
    let loading = format!("Loading configuration from: {config_path}");
    println!("{}", display.heading(&loading));
    let config = loader.load()?;

    let imports_path = args.imports_path.display();
    let loading = format!("Loading imports from: {imports_path}");
    println!("{}", display.heading(&loading));
    let imports_template = loader.load_imports_template(&args.imports_path);

    println!("{}", display.heading("🔍 Validating configuration..."));
    let tree = ConfigValidator::new().validate(&config)?;
    println!("{}", display.success("✅ Configuration validation passed"));

    let custom_imports = loader.load_custom_imports(&config);

    let plan = Plan::new(&tree, &args.base_docs_path);
    let mut prompter: Box<dyn Prompter> = if io::stdin().is_terminal() {
        Box::new(DialoguerPrompter::new())
    } else {
        Box::new(ReaderPrompter::new(io::stdin().lock(), io::stdout()))
    };
    let confirmation = StructurePreview::new(display).preview_and_confirm(
        &plan,
        prompter.as_mut(),
        &ConfirmOptions::from_env(),
    )?;
    if confirmation != Confirmation::Confirmed {
        println!("{}", display.warning("❌ Operation cancelled."));
        return Ok(());
    }

    println!();
    println!(
        "{}",
        display.heading("🚀 Creating documentation structure...")
    );
    let generator = ContentGenerator::new(&imports_template, &custom_imports);
    let builder = StructureBuilder::new(generator);
    let report = builder.build(&plan)?;
    report.print(&display, &mut io::stdout())?;
    Ok(())
}
