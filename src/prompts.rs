use crate::types::GenerateRequest;

pub struct Prompts;

impl Prompts {
    pub const SYSTEM: &'static str = "You write direct-response ad creative that converts.";

    /// Phrase callers can look for to tell canned output from a live call.
    pub const DEMO_NOTICE: &'static str =
        "Demo content — set OPENAI_API_KEY to generate a full Creative Pack.";

    /// Fixed instruction template for the generation call. The section item
    /// counts are instructions to the model, never validated on the way back.
    pub fn creative_pack(request: &GenerateRequest) -> String {
        format!(
            r#"You are a senior paid media buyer and creative strategist.

Generate a “Creative Pack” for Meta/TikTok.

Inputs:
- Product name: {product_name}
- Offer: {offer}
- Audience: {audience}
- Proof / credibility: {proof}
- Constraints: {constraints}
- CTA: {cta}

Output MUST be in markdown with these sections:
1) 50 Hooks (numbered)
2) 20 UGC Scripts (each: Title, 15s version, 30s version, 45s version, On-screen text)
3) 10 Primary Texts
4) 10 Headlines
5) 10 Thumbnail/Overlay Text ideas
6) 10 Next Tests (audience/angle/creative format ideas)

Make it punchy, varied, and practical for direct response."#,
            product_name = request.product_name,
            offer = request.offer,
            audience = request.audience,
            proof = request.proof.as_deref().unwrap_or("N/A"),
            constraints = request.constraints.as_deref().unwrap_or("N/A"),
            cta = request.cta.as_deref().unwrap_or("N/A"),
        )
    }

    /// Deterministic stand-in returned when demo mode is on and no
    /// generation credential is configured.
    pub fn demo_pack(request: &GenerateRequest) -> String {
        format!(
            r#"> {notice}

# Creative Pack — {product_name}

## 1) Hooks
1. Still scrolling past {product_name}? {offer} says stop.
2. POV: {audience} finally found the fix.
3. We made {product_name} for one reason. You.

## 2) UGC Scripts
**Script 1 — "The Skeptic"**
- 15s: "I didn't think {product_name} would work for me. Then I tried it."
- 30s: Add the offer reveal: "{offer}" and a before/after beat.
- 45s: Close with a direct ask to {audience}.
- On-screen text: "{offer}"

## 3) Primary Texts
{product_name} was built for {audience}. {offer}. No fluff, just results.

## 4) Headlines
- {product_name}: {offer}

## 5) Thumbnail/Overlay Text ideas
- "{offer}"

## 6) Next Tests
- Angle test: problem-first vs. outcome-first messaging for {audience}
"#,
            notice = Self::DEMO_NOTICE,
            product_name = request.product_name,
            offer = request.offer,
            audience = request.audience,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> GenerateRequest {
        GenerateRequest {
            session_id: "demo".to_string(),
            product_name: "GlowSkin Serum".to_string(),
            offer: "20% off first order".to_string(),
            audience: "women 25-45 into skincare".to_string(),
            proof: Some("4.8 stars from 2,000 customers".to_string()),
            constraints: None,
            cta: None,
        }
    }

    #[test]
    fn prompt_interpolates_inputs_and_defaults_optionals() {
        let prompt = Prompts::creative_pack(&request());
        assert!(prompt.contains("- Product name: GlowSkin Serum"));
        assert!(prompt.contains("- Proof / credibility: 4.8 stars from 2,000 customers"));
        assert!(prompt.contains("- Constraints: N/A"));
        assert!(prompt.contains("- CTA: N/A"));
        assert!(prompt.contains("1) 50 Hooks (numbered)"));
        assert!(prompt.contains("6) 10 Next Tests"));
    }

    #[test]
    fn demo_pack_is_deterministic_and_tagged() {
        let request = request();
        let first = Prompts::demo_pack(&request);
        let second = Prompts::demo_pack(&request);
        assert_eq!(first, second);
        assert!(first.contains(Prompts::DEMO_NOTICE));
        assert!(first.contains("GlowSkin Serum"));
        assert!(first.contains("20% off first order"));
        assert!(first.contains("women 25-45 into skincare"));
    }
}
