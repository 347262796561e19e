use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    /// Caller lacks the role (or ownership) the operation is gated on.
    Unauthorized = 3,
    NonexistentToken = 4,
    AlreadyExists = 5,
    /// Trophy status code outside the four defined states.
    InvalidStatus = 6,
    /// Royalty percent above 10000 basis points.
    OutOfRange = 7,
    /// Receiver contract rejected the token.
    NonReceiver = 8,
    NotApproved = 9,
    IndexOutOfBounds = 10,
}
