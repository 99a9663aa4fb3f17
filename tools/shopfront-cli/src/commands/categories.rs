//! List categories and their products.

use anyhow::{bail, Result};
use serde::Serialize;
use shopfront_catalog::catalog::{category_counts, CategoryCount, CategoryLabel};

use super::CategoriesArgs;
use crate::context::Context;

#[derive(Serialize)]
struct CategoryReport<'a> {
    label: &'a CategoryLabel,
    name: String,
    count: usize,
}

/// Run the categories command.
pub async fn run(args: CategoriesArgs, ctx: &Context) -> Result<()> {
    let source = ctx.product_source(args.source.options());

    if let Some(name) = args.name {
        let label = CategoryLabel::new(name);
        let spinner = ctx.output.spinner(&format!("Loading {}...", label.display_name()));
        let products = source.list_products_by_category(&label).await;
        spinner.finish_and_clear();
        let products = products?;

        if products.is_empty() {
            bail!("No products in category '{}'", label);
        }
        if ctx.output.is_json() {
            ctx.output.json(&products);
            return Ok(());
        }

        ctx.output.header(&label.display_name());
        for product in &products {
            let id = product.id.to_string();
            let price = product.effective_price().display();
            ctx.output.table_row(&[&id, &product.name, &price], &[4, 30, 10]);
        }
        return Ok(());
    }

    let spinner = ctx.output.spinner("Loading products...");
    let products = source.list_products().await;
    spinner.finish_and_clear();
    let products = products?;

    let counts = category_counts(&products);
    if ctx.output.is_json() {
        let report: Vec<CategoryReport<'_>> = counts.iter().map(report).collect();
        ctx.output.json(&report);
        return Ok(());
    }

    ctx.output.header("Categories");
    ctx.output.table_row(&["Label", "Name", "Products"], &[14, 14, 8]);
    for entry in &counts {
        let count = entry.count.to_string();
        ctx.output.table_row(
            &[entry.label.as_str(), &entry.label.display_name(), &count],
            &[14, 14, 8],
        );
    }
    ctx.output.info(&format!(
        "{} categories across {} products",
        counts.len(),
        products.len()
    ));

    Ok(())
}

fn report(entry: &CategoryCount) -> CategoryReport<'_> {
    CategoryReport {
        label: &entry.label,
        name: entry.label.display_name(),
        count: entry.count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::parse_args;

    fn ctx() -> Context {
        Context::detached(std::env::temp_dir())
    }

    #[tokio::test]
    async fn test_category_counts() {
        let args: CategoriesArgs = parse_args(&["shopfront", "--no-delay"]);
        run(args, &ctx()).await.unwrap();
    }

    #[tokio::test]
    async fn test_named_category() {
        let args: CategoriesArgs = parse_args(&["shopfront", "fitness", "--no-delay"]);
        run(args, &ctx()).await.unwrap();

        let args: CategoriesArgs = parse_args(&["shopfront", "garden", "--no-delay"]);
        let err = run(args, &ctx()).await.unwrap_err();
        assert!(err.to_string().contains("garden"));
    }

    #[test]
    fn test_report_uses_display_name() {
        let entry = CategoryCount {
            label: CategoryLabel::new("home office"),
            count: 2,
        };
        let report = report(&entry);
        assert_eq!(report.name, "Home Office");
        assert_eq!(report.count, 2);
    }
}
