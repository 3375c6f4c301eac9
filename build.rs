use shadow_rs::BuildPattern;
use shadow_rs::ShadowBuilder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Exposed as `graph_search::build`, used for `--version`.
    ShadowBuilder::builder()
        .build_pattern(BuildPattern::Lazy)
        .deny_const(Default::default())
        .build()?;

    Ok(())
}
