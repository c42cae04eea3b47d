/// Total number of screens in the onboarding wizard.
pub const WIZARD_STEPS: u8 = 5;

/// The wizard screens known to this application.
///
/// Steps 4 and 5 are never reached from here and are not modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WizardStep {
    Onboarding,
    ProfileSetup,
    CurrentAddress,
}

impl WizardStep {
    /// 1-based position in the wizard.
    pub fn number(self) -> u8 {
        match self {
            Self::Onboarding => 1,
            Self::ProfileSetup => 2,
            Self::CurrentAddress => 3,
        }
    }

    /// Progress badge, e.g. `2/5`.
    pub fn progress(self) -> String {
        format!("{}/{WIZARD_STEPS}", self.number())
    }

    /// Route path of the step.
    pub fn path(self) -> &'static str {
        match self {
            Self::Onboarding => "/whv-onboarding",
            Self::ProfileSetup => "/whv-profile-setup",
            Self::CurrentAddress => "/whv-current-address",
        }
    }
}
