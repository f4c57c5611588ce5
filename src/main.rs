use pkg_scaffold::config::split_dependencies;
use pkg_scaffold::utils::{logger, validation::Validate};
use pkg_scaffold::{
    Channel, ChannelConfig, LocalStorage, PackageSpec, RepoInfoEmitter, ScaffoldBuilder,
    ScaffoldEngine, ScaffoldOptions,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logger::init_cli_logger(false);

    tracing::info!("Starting pkg-scaffold");

    // Edit the values below before running; the tool takes no arguments.
    let dependencies = split_dependencies(
        "

",
    );

    let spec = PackageSpec {
        name: "Your Name".to_string(),
        email: "you@example.com".to_string(),
        github_id: "your-github-id".to_string(),
        repo_name: "module-name".to_string(),
        version: "0.1.0".to_string(),
        name_space: "acme".to_string(),
        module_name: "module-name".to_string(),
        description: "Your package description.".to_string(),
        topics: vec!["Topic :: Software Development :: Libraries :: Python Modules".to_string()],
        dependencies,
    };

    let options = ScaffoldOptions {
        // Will the repo use its discussion section?
        discussion: false,
    };

    for channel in [Channel::Stable, Channel::Beta] {
        let config = ChannelConfig::new(channel, &spec, options);

        if let Err(e) = config.validate() {
            tracing::error!("Configuration validation failed: {}", e);
            tracing::error!("Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }

        let storage = LocalStorage::new(config.output_root().to_string());
        let pipeline = ScaffoldBuilder::new(storage, config);
        let engine = ScaffoldEngine::new(pipeline);

        match engine.run().await {
            Ok(output_root) => {
                tracing::info!("Scaffold for {:?} channel completed", channel);
                println!("✅ Scaffold generated successfully!");
                println!("📁 Output saved to: {}", output_root);
            }
            Err(e) => {
                tracing::error!(
                    "Scaffold generation failed: {} (Category: {:?}, Severity: {:?})",
                    e,
                    e.category(),
                    e.severity()
                );
                tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());

                let exit_code = match e.severity() {
                    pkg_scaffold::utils::error::ErrorSeverity::Low => 0,
                    pkg_scaffold::utils::error::ErrorSeverity::Medium => 2,
                    pkg_scaffold::utils::error::ErrorSeverity::High => 1,
                    pkg_scaffold::utils::error::ErrorSeverity::Critical => 3,
                };

                if exit_code > 0 {
                    std::process::exit(exit_code);
                }
            }
        }
    }

    // Global descriptor, outside the channel roots
    let emitter = RepoInfoEmitter::new(LocalStorage::new(".".to_string()));
    if let Err(e) = emitter.emit(&spec.github_id, &spec.repo_name).await {
        tracing::error!("Repository descriptor emission failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    println!("✅ Repository descriptor written to env/env.json");

    Ok(())
}
