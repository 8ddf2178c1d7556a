//! Basic example demonstrating the Cloud Foundry API client.
//!
//! Run with:
//! ```
//! CF_API_URL=https://api.run.example.com CF_ACCESS_TOKEN=your-token cargo run --example basic
//! ```

use cfapi::{
    get_organization_summary, list_organization_spaces, CloudFoundryClient, List,
    ListOrganizationSpacesRequest, ListOrganizationsRequest, Organization, OrganizationStatus,
};

#[tokio::main]
async fn main() -> cfapi::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    // Create client from environment variables
    println!("Creating Cloud Foundry client...");
    let client = CloudFoundryClient::from_env()?;
    println!("Connected to: {}", client.base_url());

    // Show the URL a filtered request resolves to
    let request = ListOrganizationsRequest {
        statuses: vec![OrganizationStatus::Active],
        ..Default::default()
    };
    println!(
        "Request URL: {}",
        client.request_url("v2/organizations", &request)?
    );

    // List first page of active organizations
    println!("\n--- Listing Organizations (first page) ---");
    let organizations = Organization::list_page(&client, &request, 1, 10).await?;
    println!(
        "Found {} organizations (total: {})",
        organizations.len(),
        organizations.total_results
    );

    for organization in &organizations {
        println!("  - {} ({})", organization.entity.name, organization.id());
    }

    if let Some(first) = organizations.items.first() {
        // Space summary of the first organization
        println!("\n--- Organization Summary ---");
        let summary = get_organization_summary(&client, first.id()).await?;
        println!("Organization: {}", summary.name);
        println!("  Applications: {}", summary.application_count());
        println!("  Memory: {} MB", summary.memory_total());

        for space in &summary.spaces {
            println!(
                "  - {}: {} apps, {} services",
                space.name, space.application_count, space.service_count
            );
        }

        // Spaces through the organization endpoint
        println!("\n--- Spaces ---");
        let spaces = list_organization_spaces(
            &client,
            &ListOrganizationSpacesRequest {
                organization_id: first.id().to_string(),
                ..Default::default()
            },
        )
        .await?;
        println!("Found {} spaces", spaces.len());
    }

    println!("\nDone!");
    Ok(())
}
