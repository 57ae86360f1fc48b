//! Prints the generated fragments for a self-referential struct and an
//! imported enum.
//!
//! Run with: `cargo run --example linked_list`

use nomgen::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nomgen_codegen=debug".into()),
        )
        .init();

    let colors: Ref = "sha1-0123456789abcdef0123456789abcdef01234567".parse()?;
    let mut registry = PackageRegistry::new();
    registry.register(
        colors,
        Package::new(vec![TypeRef::enumeration("Color", ["Red", "Green", "Blue"])]),
    )?;

    let mut unit = Package::default();
    unit.add_dependency(colors);
    unit.add_type(TypeRef::structure(
        "Node",
        vec![
            Field::new("color", TypeRef::imported(colors, 0)),
            Field::new("tags", TypeRef::set(TypeRef::primitive(Kind::String))),
            Field::optional("next", TypeRef::reference(TypeRef::unresolved(0))),
        ],
        Vec::new(),
    ))?;

    let resolver = PackageResolver::new(&unit).with_registry(&registry);
    let generator = Generator::new(&resolver);

    let fields = [
        TypeRef::imported(colors, 0),
        TypeRef::set(TypeRef::primitive(Kind::String)),
        TypeRef::reference(TypeRef::unresolved(0)),
    ];
    for t in &fields {
        println!("{}", generator.name_for(t, Representation::User)?);
        for repr in Representation::ALL {
            println!(
                "  {repr:<10} type={} zero={}",
                generator.type_expr_for(t, repr).unwrap_or_else(|e| e.to_string()),
                generator
                    .zero_value_expression(t, repr)
                    .unwrap_or_else(|e| e.to_string())
            );
        }
        println!(
            "  def->user  {}",
            generator.convert_expression("v", t, Representation::Definition, Representation::User)?
        );
    }

    let ctx = SerializeContext::new("nodes").with_file_id("0");
    for descriptor in serialize_package(&unit, Some(&registry), &ctx)? {
        println!("{descriptor}");
    }
    Ok(())
}
