//! Typed model of the three-step wizard flow. Pure state, no IO: the caller
//! owns submission transport; a successful submit is terminal.

use anyhow::{anyhow, bail};

use crate::plan::{
    render_plan, B2bIntake, LocalServiceIntake, OnlineStoreIntake, PlanTemplate, WizardIntake,
};
use crate::types::LeadSubmission;
use crate::validate::is_plausible_email;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WizardStep {
    ChooseTemplate,
    AnswerQuestions,
    ReviewApprove,
}

#[derive(Clone, Debug)]
pub struct WizardFlow {
    step: WizardStep,
    template: Option<PlanTemplate>,
    submitted: bool,
    pub local_service: LocalServiceIntake,
    pub online_store: OnlineStoreIntake,
    pub b2b: B2bIntake,
}

impl Default for WizardFlow {
    fn default() -> Self {
        WizardFlow {
            step: WizardStep::ChooseTemplate,
            template: None,
            submitted: false,
            local_service: LocalServiceIntake::default(),
            online_store: OnlineStoreIntake::default(),
            b2b: B2bIntake::default(),
        }
    }
}

impl WizardFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn template(&self) -> Option<PlanTemplate> {
        self.template
    }

    pub fn submitted(&self) -> bool {
        self.submitted
    }

    /// Picking a template is the only way forward out of step 1.
    pub fn select_template(&mut self, template: PlanTemplate) {
        if self.submitted {
            return;
        }
        self.template = Some(template);
        self.step = WizardStep::AnswerQuestions;
    }

    /// Step 2 to 3 has no field-completeness gate; blank fields render as
    /// placeholders in the preview.
    pub fn next(&mut self) {
        if self.submitted {
            return;
        }
        self.step = match self.step {
            WizardStep::ChooseTemplate if self.template.is_some() => WizardStep::AnswerQuestions,
            WizardStep::ChooseTemplate => WizardStep::ChooseTemplate,
            WizardStep::AnswerQuestions | WizardStep::ReviewApprove => WizardStep::ReviewApprove,
        };
    }

    pub fn back(&mut self) {
        if self.submitted {
            return;
        }
        self.step = match self.step {
            WizardStep::ReviewApprove => WizardStep::AnswerQuestions,
            WizardStep::AnswerQuestions | WizardStep::ChooseTemplate => {
                WizardStep::ChooseTemplate
            }
        };
    }

    fn intake(&self) -> Option<WizardIntake> {
        Some(match self.template? {
            PlanTemplate::LocalService => WizardIntake::LocalService(self.local_service.clone()),
            PlanTemplate::OnlineStore => WizardIntake::OnlineStore(self.online_store.clone()),
            PlanTemplate::B2bHighTicket => WizardIntake::B2bHighTicket(self.b2b.clone()),
        })
    }

    /// Recomputed on every call, empty until a template is chosen.
    pub fn plan(&self) -> String {
        self.intake().map(|intake| render_plan(&intake)).unwrap_or_default()
    }

    /// Builds the lead payload for forwarding. Requires step 3, a selected
    /// template, and a plausible email; success ends the flow.
    pub fn submit(&mut self, email: &str) -> Result<LeadSubmission, anyhow::Error> {
        if self.submitted {
            bail!("Lead already submitted");
        }
        if self.step != WizardStep::ReviewApprove {
            bail!("Submission is only available at the review step");
        }
        let template = self
            .template
            .ok_or_else(|| anyhow!("No template selected"))?;
        if !is_plausible_email(email) {
            bail!("Email is required");
        }

        let mut lead = LeadSubmission {
            template: template.as_str().to_string(),
            email: Some(email.to_string()),
            ..LeadSubmission::default()
        };

        match template {
            PlanTemplate::LocalService => {
                let s = &self.local_service;
                lead.business_name = s.business_name.clone();
                lead.website = s.website.clone();
                lead.city = s.primary_city.clone();
                lead.radius_miles = f64::from(s.service_radius_miles);
                lead.phone = s.phone.clone();
                lead.services = s.services.clone();
                lead.hours = s.hours.clone();
                lead.promos = s.promos.clone();
            }
            PlanTemplate::OnlineStore => {
                let s = &self.online_store;
                lead.business_name = s.brand_name.clone();
                lead.website = s.website.clone();
                lead.services = s.hero_product.clone();
                lead.promos = format!("{} • {}", s.offer, s.proof);
            }
            PlanTemplate::B2bHighTicket => {
                let s = &self.b2b;
                lead.business_name = s.company_name.clone();
                lead.website = s.website.clone();
                lead.services = s.service.clone();
                lead.promos = format!("{} • {}", s.target_customer, s.proof);
            }
        }

        self.submitted = true;
        Ok(lead)
    }
}
