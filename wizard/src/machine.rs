//! The wizard state machine.

use veriflow_decision::aggregate;
use veriflow_dispatch::Dispatcher;
use veriflow_types::{Address, Consents, Decision, VerificationRecord};

use crate::error::WizardError;
use crate::render::RenderState;
use crate::step::Step;

/// Owns the step cursor and the accumulating record.
///
/// Step transitions are strictly sequential: `advance` is gated on the
/// current step's validation predicate, `retreat` is unconditional for
/// any non-initial, non-terminal step. The record leaves the machine
/// only by shared reference; once handed to the dispatcher it is never
/// mutated.
pub struct WizardMachine {
    cursor: usize,
    record: VerificationRecord,
    /// Account name confirmed by the banking step's resolution call.
    /// Cleared whenever the bank pair changes.
    account_resolution: Option<String>,
    decision: Option<Decision>,
}

impl Default for WizardMachine {
    fn default() -> Self {
        Self {
            cursor: 0,
            record: VerificationRecord::default(),
            account_resolution: None,
            decision: None,
        }
    }
}

impl WizardMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The step the cursor is on.
    pub fn step(&self) -> Step {
        Step::SEQUENCE[self.cursor]
    }

    /// Read access to the record collected so far.
    pub fn record(&self) -> &VerificationRecord {
        &self.record
    }

    /// The decision, once submission has completed.
    pub fn decision(&self) -> Option<&Decision> {
        self.decision.as_ref()
    }

    // ── Append operations ──────────────────────────────────────────────

    pub fn set_personal_info(
        &mut self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        dob: impl Into<String>,
    ) {
        self.record.first_name = first_name.into();
        self.record.last_name = last_name.into();
        self.record.dob = dob.into();
    }

    pub fn set_phone(&mut self, phone: Option<String>) {
        self.record.phone = phone;
    }

    pub fn set_address(&mut self, address: Option<Address>) {
        self.record.address = address;
    }

    pub fn set_identity_numbers(&mut self, nin: Option<String>, bvn: Option<String>) {
        self.record.nin = nin;
        self.record.bvn = bvn;
    }

    /// Record the bank pair. Any change invalidates a previous
    /// account-name resolution.
    pub fn set_banking(
        &mut self,
        bank_account: Option<String>,
        bank_code: Option<String>,
        bank_name: Option<String>,
    ) {
        if self.record.bank_account != bank_account || self.record.bank_code != bank_code {
            self.account_resolution = None;
            self.record.account_name = None;
        }
        self.record.bank_account = bank_account;
        self.record.bank_code = bank_code;
        self.record.bank_name = bank_name;
    }

    /// Attach the account name resolved for the current bank pair.
    ///
    /// The banking step refuses to advance until this has happened.
    pub fn attach_account_resolution(&mut self, account_name: impl Into<String>) {
        let name = account_name.into();
        self.record.account_name = Some(name.clone());
        self.account_resolution = Some(name);
    }

    pub fn set_documents(
        &mut self,
        dl_number: Option<String>,
        passport_number: Option<String>,
        plate_number: Option<String>,
        voters_number: Option<String>,
    ) {
        self.record.dl_number = dl_number;
        self.record.passport_number = passport_number;
        self.record.plate_number = plate_number;
        self.record.voters_number = voters_number;
    }

    pub fn set_selfie(&mut self, selfie_base64: Option<String>) {
        self.record.selfie_base64 = selfie_base64;
    }

    pub fn set_consents(&mut self, consents: Consents) {
        self.record.consents = consents;
    }

    // ── Transitions ────────────────────────────────────────────────────

    /// Move forward one step if the current step's validation holds.
    pub fn advance(&mut self) -> Result<Step, WizardError> {
        let step = self.step();
        if step.is_terminal() {
            return Err(WizardError::AtFinalStep);
        }
        self.validate_step(step)?;
        self.cursor += 1;
        tracing::debug!(step = %self.step(), "wizard advanced");
        Ok(self.step())
    }

    /// Move back one step. Unconditional for any non-initial,
    /// non-terminal step.
    pub fn retreat(&mut self) -> Result<Step, WizardError> {
        let step = self.step();
        if step.is_initial() {
            return Err(WizardError::AtFirstStep);
        }
        if step.is_terminal() {
            return Err(WizardError::AtFinalStep);
        }
        self.cursor -= 1;
        Ok(self.step())
    }

    fn validate_step(&self, step: Step) -> Result<(), WizardError> {
        let incomplete = |reason: &str| WizardError::StepIncomplete {
            step: step.title(),
            reason: reason.to_string(),
        };

        match step {
            Step::PersonalInfo => {
                if self.record.first_name.chars().count() < 2
                    || self.record.last_name.chars().count() < 2
                {
                    return Err(incomplete("first and last name are required"));
                }
                if self.record.dob.is_empty() {
                    return Err(incomplete("date of birth is required"));
                }
                if let Some(phone) = &self.record.phone {
                    if !is_digits(phone, 11) {
                        return Err(incomplete("phone must be 11 digits"));
                    }
                }
            }
            Step::Address => {
                if let Some(address) = &self.record.address {
                    if address.street.chars().count() < 5 {
                        return Err(incomplete("street must be at least 5 characters"));
                    }
                }
            }
            Step::IdentityNumbers => {
                if let Some(nin) = &self.record.nin {
                    if !is_digits(nin, 11) {
                        return Err(incomplete("nin must be 11 digits"));
                    }
                }
                if let Some(bvn) = &self.record.bvn {
                    if !is_digits(bvn, 11) {
                        return Err(incomplete("bvn must be 11 digits"));
                    }
                }
            }
            Step::Banking => {
                let any_entered = self.record.bank_account.is_some()
                    || self.record.bank_code.is_some();
                if any_entered {
                    match &self.record.bank_account {
                        Some(account) if is_digits(account, 10) => {}
                        _ => return Err(incomplete("account number must be 10 digits")),
                    }
                    if self.record.bank_code.is_none() {
                        return Err(incomplete("select a bank"));
                    }
                    if self.account_resolution.is_none() {
                        return Err(incomplete("verify the account before continuing"));
                    }
                }
            }
            // Document and liveness facts are optional; full-record
            // validation happens at submission.
            Step::DocumentUpload | Step::Liveness | Step::Review => {}
        }
        Ok(())
    }

    // ── Submission ─────────────────────────────────────────────────────

    /// Validate the finished record, dispatch it, and aggregate the
    /// outcomes. Only available from the terminal step, exactly once.
    pub async fn submit(&mut self, dispatcher: &Dispatcher) -> Result<Decision, WizardError> {
        if !self.step().is_terminal() {
            return Err(WizardError::NotAtReview);
        }
        if self.decision.is_some() {
            return Err(WizardError::AlreadySubmitted);
        }

        self.record.validate()?;

        let outcomes = dispatcher.dispatch(&self.record).await;
        let decision = aggregate(&outcomes);
        tracing::info!(status = %decision.status, risk = decision.risk_score, "submission decided");

        self.decision = Some(decision.clone());
        Ok(decision)
    }

    /// Render state for the terminal step.
    pub fn render_state(&self) -> RenderState {
        RenderState::from_decision(self.decision.as_ref())
    }
}

fn is_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine_with_personal_info() -> WizardMachine {
        let mut machine = WizardMachine::new();
        machine.set_personal_info("Ada", "Obi", "1990-04-12");
        machine.set_consents(Consents {
            terms: true,
            data_processing: true,
        });
        machine
    }

    /// Walk a machine forward to the given step.
    fn advance_to(machine: &mut WizardMachine, step: Step) {
        while machine.step() != step {
            machine.advance().expect("steps up to target should validate");
        }
    }

    // ── Advancement gating ──────────────────────────────────────────────

    #[test]
    fn fresh_machine_starts_at_personal_info() {
        assert_eq!(WizardMachine::new().step(), Step::PersonalInfo);
    }

    #[test]
    fn empty_personal_info_blocks_advance() {
        let mut machine = WizardMachine::new();
        let err = machine.advance().unwrap_err();
        assert!(matches!(err, WizardError::StepIncomplete { .. }));
        assert_eq!(machine.step(), Step::PersonalInfo);
    }

    #[test]
    fn valid_personal_info_advances() {
        let mut machine = machine_with_personal_info();
        assert_eq!(machine.advance().unwrap(), Step::Address);
    }

    #[test]
    fn bad_phone_blocks_personal_info() {
        let mut machine = machine_with_personal_info();
        machine.set_phone(Some("12345".into()));
        assert!(machine.advance().is_err());

        machine.set_phone(Some("08012345678".into()));
        assert!(machine.advance().is_ok());
    }

    #[test]
    fn optional_steps_advance_when_empty() {
        let mut machine = machine_with_personal_info();
        advance_to(&mut machine, Step::Review);
        assert_eq!(machine.step(), Step::Review);
    }

    #[test]
    fn bad_nin_blocks_identity_numbers() {
        let mut machine = machine_with_personal_info();
        advance_to(&mut machine, Step::IdentityNumbers);
        machine.set_identity_numbers(Some("123".into()), None);
        assert!(machine.advance().is_err());

        machine.set_identity_numbers(Some("12345678901".into()), None);
        assert!(machine.advance().is_ok());
    }

    #[test]
    fn advance_from_terminal_step_errors() {
        let mut machine = machine_with_personal_info();
        advance_to(&mut machine, Step::Review);
        assert_eq!(machine.advance(), Err(WizardError::AtFinalStep));
    }

    // ── Banking resolution gate ─────────────────────────────────────────

    #[test]
    fn banking_blocks_without_resolution() {
        let mut machine = machine_with_personal_info();
        advance_to(&mut machine, Step::Banking);
        machine.set_banking(Some("0123456789".into()), Some("058".into()), None);

        let err = machine.advance().unwrap_err();
        assert!(matches!(err, WizardError::StepIncomplete { .. }));

        machine.attach_account_resolution("ADA OBI");
        assert!(machine.advance().is_ok());
        assert_eq!(machine.record().account_name.as_deref(), Some("ADA OBI"));
    }

    #[test]
    fn banking_advances_when_nothing_entered() {
        let mut machine = machine_with_personal_info();
        advance_to(&mut machine, Step::Banking);
        assert!(machine.advance().is_ok());
    }

    #[test]
    fn changing_account_clears_resolution() {
        let mut machine = machine_with_personal_info();
        advance_to(&mut machine, Step::Banking);
        machine.set_banking(Some("0123456789".into()), Some("058".into()), None);
        machine.attach_account_resolution("ADA OBI");

        machine.set_banking(Some("9876543210".into()), Some("058".into()), None);
        assert!(machine.record().account_name.is_none());
        assert!(machine.advance().is_err());
    }

    #[test]
    fn changing_bank_clears_resolution() {
        let mut machine = machine_with_personal_info();
        advance_to(&mut machine, Step::Banking);
        machine.set_banking(Some("0123456789".into()), Some("058".into()), None);
        machine.attach_account_resolution("ADA OBI");

        machine.set_banking(Some("0123456789".into()), Some("044".into()), None);
        assert!(machine.advance().is_err());
    }

    #[test]
    fn short_account_number_blocks_banking() {
        let mut machine = machine_with_personal_info();
        advance_to(&mut machine, Step::Banking);
        machine.set_banking(Some("12345".into()), Some("058".into()), None);
        machine.attach_account_resolution("ADA OBI");
        assert!(machine.advance().is_err());
    }

    // ── Retreat ─────────────────────────────────────────────────────────

    #[test]
    fn retreat_is_unconditional_mid_sequence() {
        let mut machine = machine_with_personal_info();
        advance_to(&mut machine, Step::IdentityNumbers);
        // Leave the step invalid on purpose; retreat must still work.
        machine.set_identity_numbers(Some("bad".into()), None);
        assert_eq!(machine.retreat().unwrap(), Step::Address);
    }

    #[test]
    fn retreat_from_first_step_errors() {
        let mut machine = WizardMachine::new();
        assert_eq!(machine.retreat(), Err(WizardError::AtFirstStep));
    }

    #[test]
    fn retreat_from_terminal_step_errors() {
        let mut machine = machine_with_personal_info();
        advance_to(&mut machine, Step::Review);
        assert_eq!(machine.retreat(), Err(WizardError::AtFinalStep));
    }

    // ── Render contract ─────────────────────────────────────────────────

    #[test]
    fn render_state_is_loading_before_decision() {
        let machine = WizardMachine::new();
        assert_eq!(machine.render_state(), RenderState::Loading);
    }
}
