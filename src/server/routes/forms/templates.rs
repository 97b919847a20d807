//! Marketing form prompt catalogue

use serde_json::Value;

/// Placeholder replaced with the requested tagline count
const COUNT_PLACEHOLDER: &str = "{count}";
const DEFAULT_TAGLINE_COUNT: &str = "6";

/// One marketing form: its route and the prompt it renders
#[derive(Debug)]
pub struct FormTemplate {
    pub category: &'static str,
    pub name: &'static str,
    /// Request lead, followed by the serialized form body
    pub lead: &'static str,
    /// JSON shape the model is asked to return
    pub returns: &'static str,
    /// Generated email may be sent straight away (`sendNow`)
    pub sends_email: bool,
}

impl FormTemplate {
    const fn new(
        category: &'static str,
        name: &'static str,
        lead: &'static str,
        returns: &'static str,
    ) -> Self {
        Self {
            category,
            name,
            lead,
            returns,
            sends_email: false,
        }
    }

    const fn sending_email(mut self) -> Self {
        self.sends_email = true;
        self
    }

    pub fn path(&self) -> String {
        format!("/api/{}/{}", self.category, self.name)
    }

    /// Prompt text for one submission of this form
    pub fn render(&self, body: &Value) -> String {
        let lead = if self.lead.contains(COUNT_PLACEHOLDER) {
            self.lead.replace(COUNT_PLACEHOLDER, &requested_count(body))
        } else {
            self.lead.to_string()
        };
        format!("{} {}.\nReturn JSON: {}", lead, body, self.returns)
    }
}

fn requested_count(body: &Value) -> String {
    match body.get("count") {
        Some(Value::Number(n)) if n.as_f64().is_some_and(|f| f != 0.0) => n.to_string(),
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        _ => DEFAULT_TAGLINE_COUNT.to_string(),
    }
}

pub static FORMS: &[FormTemplate] = &[
    // Advertising
    FormTemplate::new(
        "ads",
        "google",
        "Form: Google Ads Campaign creation. Input:",
        "{ ok:true, campaignDraft:{ name, headlines:[...], descriptions:[...], keywords:[...], budget:{daily, total}, targeting:{locations, audiences} }, previewAdText:\"...\", notes:\"any tips or warnings\" }",
    ),
    FormTemplate::new(
        "ads",
        "meta",
        "Form: Facebook/Instagram Ads. Input:",
        "{ ok:true, creativeSuggestions:{ caption, primaryText, headline, cta }, adPayload:{ platform, audience, creativeUrl }, notes:\"any sizing/format tips\" }",
    ),
    FormTemplate::new(
        "ads",
        "youtube",
        "YouTube Ads creation. Input:",
        "{ ok:true, adScript:\"...\", adDescription:\"...\", tags:[...], targeting:{...} }",
    ),
    FormTemplate::new(
        "ads",
        "event",
        "Event Ad campaign. Input:",
        "{ ok:true, headline, bannerText, shortDescription, suggestedSizes:[...], cta }",
    ),
    // Content marketing
    FormTemplate::new(
        "content",
        "blog",
        "Create a blog content brief for input:",
        "{ ok:true, title:\"...\", outline:[ {heading:\"\", subheadings:[\"\",\"\"], suggestedWords:300 }, ... ], metaDescription:\"...\", seoKeywords:[...] }",
    ),
    FormTemplate::new(
        "content",
        "product-description",
        "Write product description and bullets. Input:",
        "{ ok:true, bullets:[...], seoParagraph:\"...\" }",
    ),
    FormTemplate::new(
        "content",
        "video-script",
        "Create a video script (include visual cues) for input:",
        "{ ok:true, scriptText:\"...\", timestamps:[ {sec:0, text:\"...\"}, ... ], ttsNote:\"if you want TTS\" }",
    ),
    FormTemplate::new(
        "content",
        "infographic",
        "Create an infographic brief for input:",
        "{ ok:true, layout:[ {section:\"\", text:\"\", visual:\"icon/chart\"} ], suggestedColors:[...], exportText:\"...\" }",
    ),
    // Email marketing
    FormTemplate::new(
        "email",
        "campaign",
        "Generate an email campaign from:",
        "{ ok:true, subject:\"...\", htmlBody:\"<p>...</p>\", textBody:\"...\", cta:\"...\" }",
    )
    .sending_email(),
    FormTemplate::new(
        "email",
        "drip",
        "Create a drip email sequence for input:",
        "{ ok:true, steps:[ {delayHours:0, subject:\"...\", html:\"<p>..</p>\"}, ... ] }",
    ),
    // Events
    FormTemplate::new(
        "events",
        "webinar",
        "Setup Webinar confirmation + email copy for input:",
        "{ ok:true, schedule:{title, startTime, duration}, confirmationEmail:{subject, html}, joinInfoNote:\"If connected to Zoom use OAuth\" }",
    ),
    FormTemplate::new(
        "events",
        "campaign",
        "Create event campaign assets for:",
        "{ ok:true, headline, bannerText, socialCopy:{twitter, linkedin, instagram}, promotionPlan:[\"meta\",\"email\"] }",
    ),
    // Internal workflow
    FormTemplate::new(
        "internal",
        "approval",
        "Create a campaign approval review for:",
        "{ ok:true, approvalStatus:\"pending/approved/needs_changes\", comments:[...], sheetRow:{id, link} }",
    ),
    FormTemplate::new(
        "internal",
        "budget",
        "Propose budget allocations for:",
        "{ ok:true, allocations:[ {team, amount, rationale} ], summary:\"...\" }",
    ),
    // Product
    FormTemplate::new(
        "product",
        "launch",
        "Create product launch plan & copy for:",
        "{ ok:true, heroCopy, emailSequence:[...], socialPlan:[...], assets:[{type, filename}] }",
    ),
    FormTemplate::new(
        "product",
        "upsell",
        "Write an upsell email for:",
        "{ ok:true, subject, htmlBody, offerCode }",
    ),
    // Tools
    FormTemplate::new(
        "tools",
        "kpi",
        "Record KPI (demo) for:",
        "{ ok:true, recorded:{metric, value, timestamp}, trendSuggestion:\"up/down/neutral\" }",
    ),
    FormTemplate::new(
        "tools",
        "abtest",
        "Propose A/B test tracking plan for:",
        "{ ok:true, variantMetricsTemplate:{}, sampleSizeEstimate:1000, analysisPlan:\"...\" }",
    ),
    // Social
    FormTemplate::new(
        "social",
        "schedule",
        "Schedule post (demo) for:",
        "{ ok:true, scheduled:{platform, channelId, mediaUrl, scheduleAt}, previewUrl:\"...\" }",
    ),
    FormTemplate::new(
        "social",
        "caption",
        "Generate captions + hashtags for:",
        "{ ok:true, captions:[ {length:'short', text:'...'}, {length:'long', text:'...'} ], hashtags:[...] }",
    ),
    // Sales
    FormTemplate::new(
        "sales",
        "offer",
        "Create an offer campaign for:",
        "{ ok:true, bannerText, emailCopy, adCopy, couponCode }",
    ),
    FormTemplate::new(
        "sales",
        "loyalty",
        "Design a loyalty program for:",
        "{ ok:true, tiers:[{name, criteria, benefits}], communicationPlan:[...] }",
    ),
    // Branding
    FormTemplate::new(
        "branding",
        "identity",
        "Create a brand identity brief for:",
        "{ ok:true, logoIdeas:[...], colorPalettes:[...], fontSuggestions:[...] }",
    ),
    FormTemplate::new(
        "branding",
        "tagline",
        "Generate {count} taglines for brand:",
        "{ ok:true, taglines:[ \"one\", \"two\" ] }",
    ),
];
