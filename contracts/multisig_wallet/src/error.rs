use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    /// Caller is not an owner.
    Unauthorized = 2,
    /// Referenced transaction id does not exist.
    NotFound = 3,
    AlreadyConfirmed = 4,
    NotConfirmed = 5,
    AlreadyExecuted = 6,
    /// Execution attempted below the confirmation threshold.
    ThresholdNotMet = 7,
    /// Threshold outside [1, owner count].
    InvalidRequirement = 8,
    DuplicateOwner = 9,
    OwnerExists = 10,
    OwnerNotFound = 11,
    /// Transaction carries value but no value asset was configured.
    ValueTokenMissing = 12,
    /// Negative value.
    InvalidValue = 13,
    /// Self-targeted governance payload that could not be decoded.
    InvalidPayload = 14,
}
