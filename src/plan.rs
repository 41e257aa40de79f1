//! Wizard plan assembly: pure string interpolation into three fixed
//! per-category layouts. No IO, no failure modes; empty intake fields fall
//! back to literal bracket placeholders so a preview always renders.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PlanTemplate {
    LocalService,
    OnlineStore,
    B2bHighTicket,
}

impl PlanTemplate {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanTemplate::LocalService => "local-service",
            PlanTemplate::OnlineStore => "online-store",
            PlanTemplate::B2bHighTicket => "b2b-high-ticket",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default, rename_all = "camelCase")]
pub struct LocalServiceIntake {
    pub business_name: String,
    pub website: String,
    pub phone: String,
    pub primary_city: String,
    pub service_radius_miles: u32,
    pub services: String,
    pub hours: String,
    pub promos: String,
}

impl Default for LocalServiceIntake {
    fn default() -> Self {
        LocalServiceIntake {
            business_name: String::new(),
            website: String::new(),
            phone: String::new(),
            primary_city: String::new(),
            service_radius_miles: 20,
            services: "AC repair, AC install, HVAC maintenance".to_string(),
            hours: "Mon–Fri 8am–6pm, Sat 9am–2pm".to_string(),
            promos: "Free estimate • Same-day service • Financing available".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default, rename_all = "camelCase")]
pub struct OnlineStoreIntake {
    pub brand_name: String,
    pub website: String,
    pub hero_product: String,
    pub price_point: String,
    pub geo: String,
    pub offer: String,
    pub proof: String,
}

impl Default for OnlineStoreIntake {
    fn default() -> Self {
        OnlineStoreIntake {
            brand_name: String::new(),
            website: String::new(),
            hero_product: String::new(),
            price_point: "$".to_string(),
            geo: "United States".to_string(),
            offer: "Free shipping • Limited-time discount".to_string(),
            proof: "⭐ 4.7/5 rating • 1,000+ customers".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default, rename_all = "camelCase")]
pub struct B2bIntake {
    pub company_name: String,
    pub website: String,
    pub service: String,
    pub geo: String,
    pub target_customer: String,
    pub proof: String,
    pub booking_link: String,
}

impl Default for B2bIntake {
    fn default() -> Self {
        B2bIntake {
            company_name: String::new(),
            website: String::new(),
            service: String::new(),
            geo: "United States".to_string(),
            target_customer: "small business owners".to_string(),
            proof: "Case study: reduced CPL by 35% in 30 days".to_string(),
            booking_link: String::new(),
        }
    }
}

/// Template selector plus its category-specific intake, as sent to the
/// preview endpoint.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(tag = "template", rename_all = "kebab-case")]
pub enum WizardIntake {
    LocalService(LocalServiceIntake),
    OnlineStore(OnlineStoreIntake),
    B2bHighTicket(B2bIntake),
}

impl WizardIntake {
    pub fn template(&self) -> PlanTemplate {
        match self {
            WizardIntake::LocalService(_) => PlanTemplate::LocalService,
            WizardIntake::OnlineStore(_) => PlanTemplate::OnlineStore,
            WizardIntake::B2bHighTicket(_) => PlanTemplate::B2bHighTicket,
        }
    }
}

pub fn render_plan(intake: &WizardIntake) -> String {
    match intake {
        WizardIntake::LocalService(s) => render_local_service(s),
        WizardIntake::OnlineStore(s) => render_online_store(s),
        WizardIntake::B2bHighTicket(s) => render_b2b(s),
    }
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

fn title_case(value: &str) -> String {
    value
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_local_service(s: &LocalServiceIntake) -> String {
    let service0 = s
        .services
        .split(',')
        .next()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or("AC repair");

    let keyword_themes = [
        format!("{service0} near me"),
        format!("{} {service0}", or_placeholder(&s.primary_city, "your city")),
        format!("emergency {service0}"),
        format!("same day {service0}"),
    ];

    let negatives = [
        "jobs", "salary", "school", "training", "manual", "pdf", "youtube", "diy", "parts",
        "wholesale", "free",
    ];

    let headlines = [
        format!(
            "{} {} — Same Day",
            or_placeholder(&s.primary_city, "Local"),
            title_case(service0)
        ),
        format!("Call Now • {}", or_placeholder(&s.business_name, "Local Pros")),
        "Free Estimate • Upfront Pricing".to_string(),
        "Licensed & Insured".to_string(),
        "Fast Scheduling".to_string(),
    ];

    let descriptions = [
        format!(
            "Need help fast? {} do {}. {}. Call now for availability.",
            or_placeholder(&s.business_name, "We"),
            s.services,
            s.promos
        ),
        format!(
            "Serving {} within {} miles. Book service in minutes.",
            or_placeholder(&s.primary_city, "your area"),
            s.service_radius_miles
        ),
    ];

    let mut lines: Vec<String> = vec![
        "TEMPLATE: LOCAL SERVICE — GOOGLE SEARCH".to_string(),
        "GOAL: Calls + website form leads (both)".to_string(),
        "\nBUSINESS".to_string(),
        format!("- Name: {}", or_placeholder(&s.business_name, "[Business Name]")),
        format!("- Website: {}", or_placeholder(&s.website, "[Website]")),
        format!("- Phone: {}", or_placeholder(&s.phone, "[Phone]")),
        format!(
            "- Area: {} ({} mi radius)",
            or_placeholder(&s.primary_city, "[City]"),
            s.service_radius_miles
        ),
        format!("- Hours: {}", or_placeholder(&s.hours, "[Hours]")),
        "\nCAMPAIGN SETUP (simple + high intent)".to_string(),
        "- Campaign 1: Emergency / “Near me” searches (Exact + Phrase)".to_string(),
        "- Campaign 2: Core services (Exact + Phrase)".to_string(),
        "- Campaign 3: Brand (optional)".to_string(),
        "- Ad schedule: match hours".to_string(),
        "\nKEYWORDS (starter themes)".to_string(),
    ];
    lines.extend(keyword_themes.iter().map(|k| format!("- {k}")));
    lines.push("\nNEGATIVES (starter)".to_string());
    lines.extend(negatives.iter().map(|n| format!("- {n}")));
    lines.push("\nAD TEXT (copy/paste starters)".to_string());
    lines.push("Headlines:".to_string());
    lines.extend(headlines.iter().map(|h| format!("- {h}")));
    lines.push("Descriptions:".to_string());
    lines.extend(descriptions.iter().map(|d| format!("- {d}")));
    lines.push("\nTRACKING CHECKLIST".to_string());
    lines.push("- Calls from ads enabled".to_string());
    lines.push("- Website form submit conversion".to_string());
    lines.push("- Optional: call tracking number on site".to_string());
    lines.join("\n")
}

fn render_online_store(s: &OnlineStoreIntake) -> String {
    [
        "TEMPLATE: ONLINE STORE — META ADS".to_string(),
        "GOAL: Purchases".to_string(),
        "\nBRAND".to_string(),
        format!("- Brand: {}", or_placeholder(&s.brand_name, "[Brand Name]")),
        format!("- Website: {}", or_placeholder(&s.website, "[Website]")),
        format!("- Hero product: {}", or_placeholder(&s.hero_product, "[Product]")),
        format!("- Price point: {}", or_placeholder(&s.price_point, "$")),
        format!("- Geo: {}", or_placeholder(&s.geo, "United States")),
        "\nOFFER + PROOF".to_string(),
        format!("- Offer: {}", or_placeholder(&s.offer, "[Offer]")),
        format!("- Proof: {}", or_placeholder(&s.proof, "[Reviews/results]")),
        "\nCAMPAIGN SETUP (simple)".to_string(),
        "- Campaign A: Prospecting (broad + interest test)".to_string(),
        "- Campaign B: Retargeting (7–30 day site visitors)".to_string(),
        "- Budget split (starter): 80% prospecting / 20% retargeting".to_string(),
        "\nCREATIVE STARTERS (plain English)".to_string(),
        "- 10 attention-grabbing first lines".to_string(),
        "- 5 short video scripts (what to say on camera)".to_string(),
        "- 10 ad text variations (short + long)".to_string(),
        "\nTRACKING CHECKLIST".to_string(),
        "- Pixel installed".to_string(),
        "- Purchase event firing".to_string(),
        "- Verify checkout conversion tracking".to_string(),
    ]
    .join("\n")
}

fn render_b2b(s: &B2bIntake) -> String {
    [
        "TEMPLATE: B2B / HIGH-TICKET — GOOGLE SEARCH".to_string(),
        "GOAL: Booked calls + qualified leads".to_string(),
        "\nBUSINESS".to_string(),
        format!("- Company: {}", or_placeholder(&s.company_name, "[Company]")),
        format!("- Website: {}", or_placeholder(&s.website, "[Website]")),
        format!("- Service: {}", or_placeholder(&s.service, "[Service]")),
        format!("- Geo: {}", or_placeholder(&s.geo, "United States")),
        format!(
            "- Target customer: {}",
            or_placeholder(&s.target_customer, "[Who buys]")
        ),
        "\nPROOF".to_string(),
        format!(
            "- {}",
            or_placeholder(&s.proof, "[Case study / results / years in business]")
        ),
        "\nCAMPAIGN SETUP (simple)".to_string(),
        "- Campaign 1: High-intent keywords (\"service + city\", \"service pricing\", \"hire\")"
            .to_string(),
        "- Campaign 2: Competitor (optional)".to_string(),
        "- Extensions: callouts, sitelinks, structured snippets".to_string(),
        "\nLANDING PAGE CHECKLIST".to_string(),
        "- Clear headline + 3 bullets".to_string(),
        "- Proof (logos/reviews/case study)".to_string(),
        "- One CTA: Book a call".to_string(),
        format!("Booking link: {}", or_placeholder(&s.booking_link, "[Link]")),
        "\nTRACKING CHECKLIST".to_string(),
        "- Call conversion".to_string(),
        "- Form conversion".to_string(),
        "- Calendar booking conversion (if possible)".to_string(),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roanoke() -> LocalServiceIntake {
        LocalServiceIntake {
            business_name: "Roanoke AC Pros".to_string(),
            website: String::new(),
            phone: String::new(),
            primary_city: "Roanoke, VA".to_string(),
            service_radius_miles: 20,
            services: "AC repair, AC install".to_string(),
            hours: String::new(),
            promos: String::new(),
        }
    }

    #[test]
    fn local_service_example_intake() {
        let plan = render_plan(&WizardIntake::LocalService(roanoke()));
        let keywords_start = plan.find("KEYWORDS (starter themes)").unwrap();
        let first_keyword = plan[keywords_start..]
            .lines()
            .nth(1)
            .unwrap();
        assert_eq!(first_keyword, "- AC repair near me");
        assert!(plan.contains("- Roanoke, VA AC Repair — Same Day"));
        assert!(plan.contains("- Area: Roanoke, VA (20 mi radius)"));
    }

    #[test]
    fn assembler_is_pure_and_deterministic() {
        let intake = WizardIntake::LocalService(roanoke());
        assert_eq!(render_plan(&intake), render_plan(&intake));
    }

    #[test]
    fn empty_fields_render_placeholders() {
        let intake = WizardIntake::LocalService(LocalServiceIntake {
            business_name: String::new(),
            website: String::new(),
            phone: String::new(),
            primary_city: String::new(),
            service_radius_miles: 0,
            services: String::new(),
            hours: String::new(),
            promos: String::new(),
        });
        let plan = render_plan(&intake);
        assert!(plan.contains("- Name: [Business Name]"));
        assert!(plan.contains("- Website: [Website]"));
        assert!(plan.contains("- Phone: [Phone]"));
        assert!(plan.contains("- Area: [City] (0 mi radius)"));
        assert!(plan.contains("- Hours: [Hours]"));
        // Empty services still seed a usable keyword theme.
        assert!(plan.contains("- AC repair near me"));
    }

    #[test]
    fn online_store_and_b2b_placeholders() {
        let store = render_plan(&WizardIntake::OnlineStore(OnlineStoreIntake {
            brand_name: String::new(),
            website: String::new(),
            hero_product: String::new(),
            price_point: String::new(),
            geo: String::new(),
            offer: String::new(),
            proof: String::new(),
        }));
        assert!(store.starts_with("TEMPLATE: ONLINE STORE — META ADS"));
        assert!(store.contains("- Brand: [Brand Name]"));
        assert!(store.contains("- Offer: [Offer]"));
        assert!(store.contains("- Geo: United States"));

        let b2b = render_plan(&WizardIntake::B2bHighTicket(B2bIntake {
            company_name: String::new(),
            website: String::new(),
            service: String::new(),
            geo: String::new(),
            target_customer: String::new(),
            proof: String::new(),
            booking_link: String::new(),
        }));
        assert!(b2b.contains("- Company: [Company]"));
        assert!(b2b.contains("- Target customer: [Who buys]"));
        assert!(b2b.contains("Booking link: [Link]"));
    }

    #[test]
    fn wizard_intake_parses_tagged_json() {
        let intake: WizardIntake = serde_json::from_str(
            r#"{"template":"local-service","businessName":"Roanoke AC Pros","primaryCity":"Roanoke, VA"}"#,
        )
        .unwrap();
        assert_eq!(intake.template(), PlanTemplate::LocalService);
        match intake {
            WizardIntake::LocalService(s) => {
                assert_eq!(s.business_name, "Roanoke AC Pros");
                // Unspecified fields take the wizard's prefill defaults.
                assert_eq!(s.service_radius_miles, 20);
                assert_eq!(s.services, "AC repair, AC install, HVAC maintenance");
            }
            _ => unreachable!(),
        }

        assert!(serde_json::from_str::<WizardIntake>(r#"{"template":"billboards"}"#).is_err());
    }

    #[test]
    fn template_names_round_trip() {
        for template in [
            PlanTemplate::LocalService,
            PlanTemplate::OnlineStore,
            PlanTemplate::B2bHighTicket,
        ] {
            let name = serde_json::to_value(template).unwrap();
            assert_eq!(name, template.as_str());
        }
    }
}
