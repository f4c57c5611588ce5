use crate::core::ScaffoldPipeline;
use crate::utils::error::Result;

pub struct ScaffoldEngine<P: ScaffoldPipeline> {
    pipeline: P,
}

impl<P: ScaffoldPipeline> ScaffoldEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        println!("Starting scaffold generation...");

        // Resolve
        println!("Resolving templates...");
        let plan = self.pipeline.resolve().await?;
        println!("Resolved {} scalar fields", plan.scalars.len());

        // Render
        println!("Rendering scaffold...");
        let scaffold = self.pipeline.render(plan).await?;
        println!(
            "Rendered build configuration ({} bytes)",
            scaffold.build_config.len()
        );

        // Write
        println!("Writing files...");
        let output_root = self.pipeline.write(scaffold).await?;
        println!("Scaffold written to: {}", output_root);

        Ok(output_root)
    }
}
