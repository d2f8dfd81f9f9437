pub mod request;
pub mod response;

pub use request::{
    BotInfo, CurrentIntent, IntentRequest, IntentRequestBuilder, InvocationSource,
    SessionAttributes, Slots,
};
pub use response::{DialogAction, DialogResponse, FulfillmentState, Message};
