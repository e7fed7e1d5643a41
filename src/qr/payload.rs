//! Payload encoding: maps (category id, form values) to the string that gets
//! encoded into the QR image.
//!
//! Each category has exactly one encoding rule (URI, vCard, VEVENT, WIFI
//! record, ...). The mapping is a pure function: no I/O, no state, and it
//! never fails; absent values coalesce to empty strings.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::collections::{BTreeMap, HashMap};

/// Characters escaped when a free-text value is interpolated into a URI query
/// component. Matches JavaScript's `encodeURIComponent`: everything but
/// ASCII alphanumerics and `- _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a string for use as a URI query component.
fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Fetch a value by field name, coalescing absent keys to the empty string.
fn get<'a>(values: &'a HashMap<String, String>, name: &str) -> &'a str {
    values.get(name).map(String::as_str).unwrap_or("")
}

/// Contact sub-type, selected by the `type` field of the contact category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    VCard,
    Phone,
    Sms,
    Email,
    WhatsApp,
    /// Unrecognized sub-type; encodes to the empty string.
    Unknown,
}

impl ContactKind {
    fn parse(value: &str) -> Self {
        match value {
            "vCard" => Self::VCard,
            "Phone" => Self::Phone,
            "SMS" => Self::Sms,
            "Email" => Self::Email,
            "WhatsApp" => Self::WhatsApp,
            _ => Self::Unknown,
        }
    }
}

/// Contact & Communication fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactPayload {
    pub kind: ContactKind,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

/// Payments & Donations fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentPayload {
    Upi {
        recipient: String,
        amount: String,
        currency: String,
        note: String,
    },
    /// Non-UPI payment types encode the recipient verbatim (a PayPal link, a
    /// wallet address, ...).
    Direct { recipient: String },
}

/// Business & Marketing fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BusinessPayload {
    Card {
        contact_person: String,
        business_name: String,
        phone: String,
        email: String,
        website: String,
        address: String,
    },
    Link { website: String, email: String },
}

/// Events & Ticketing fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventPayload {
    pub event_name: String,
    pub event_date: String,
    pub location: String,
    pub description: String,
    pub rsvp_url: String,
}

/// Location & Navigation fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationPayload {
    pub location_name: String,
    pub address: String,
    /// Raw "lat,lng" string; `None` when the field was left empty.
    pub coordinates: Option<String>,
}

/// WiFi & Authentication fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkPayload {
    Wifi {
        ssid: String,
        password: String,
        security: String,
    },
    Login { login_url: String },
}

/// Typed payload, one variant per catalog category.
///
/// Classification from the raw value map happens in [`Payload::from_values`];
/// the encoding rule lives in [`Payload::render`]. The `Unknown` variant is
/// unreachable through the fixed catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Website { url: String },
    Contact(ContactPayload),
    Document { file_url: String },
    Payment(PaymentPayload),
    Business(BusinessPayload),
    Event(EventPayload),
    Location(LocationPayload),
    Media { media_url: String },
    Network(NetworkPayload),
    Creative { reveal_url: String, content: String },
    Unknown(BTreeMap<String, String>),
}

impl Payload {
    /// Classify a raw value map under a category id.
    pub fn from_values(category_id: &str, values: &HashMap<String, String>) -> Self {
        match category_id {
            "website-links" => Self::Website {
                url: get(values, "url").to_string(),
            },
            "contact-communication" => Self::Contact(ContactPayload {
                kind: ContactKind::parse(get(values, "type")),
                name: get(values, "name").to_string(),
                phone: get(values, "phone").to_string(),
                email: get(values, "email").to_string(),
                message: get(values, "message").to_string(),
            }),
            "documents-files" => Self::Document {
                file_url: get(values, "fileUrl").to_string(),
            },
            "payments-donations" => {
                if get(values, "paymentType") == "UPI" {
                    Self::Payment(PaymentPayload::Upi {
                        recipient: get(values, "recipient").to_string(),
                        amount: get(values, "amount").to_string(),
                        currency: get(values, "currency").to_string(),
                        note: get(values, "note").to_string(),
                    })
                } else {
                    Self::Payment(PaymentPayload::Direct {
                        recipient: get(values, "recipient").to_string(),
                    })
                }
            }
            "business-marketing" => {
                if get(values, "businessType") == "Business Card" {
                    Self::Business(BusinessPayload::Card {
                        contact_person: get(values, "contactPerson").to_string(),
                        business_name: get(values, "businessName").to_string(),
                        phone: get(values, "phone").to_string(),
                        email: get(values, "email").to_string(),
                        website: get(values, "website").to_string(),
                        address: get(values, "address").to_string(),
                    })
                } else {
                    Self::Business(BusinessPayload::Link {
                        website: get(values, "website").to_string(),
                        email: get(values, "email").to_string(),
                    })
                }
            }
            "events-ticketing" => Self::Event(EventPayload {
                event_name: get(values, "eventName").to_string(),
                event_date: get(values, "eventDate").to_string(),
                location: get(values, "location").to_string(),
                description: get(values, "description").to_string(),
                rsvp_url: get(values, "rsvpUrl").to_string(),
            }),
            "location-navigation" => {
                let coordinates = get(values, "coordinates");
                Self::Location(LocationPayload {
                    location_name: get(values, "locationName").to_string(),
                    address: get(values, "address").to_string(),
                    coordinates: if coordinates.is_empty() {
                        None
                    } else {
                        Some(coordinates.to_string())
                    },
                })
            }
            "media-entertainment" => Self::Media {
                media_url: get(values, "mediaUrl").to_string(),
            },
            "wifi-auth" => {
                if get(values, "authType") == "WiFi" {
                    Self::Network(NetworkPayload::Wifi {
                        ssid: get(values, "networkName").to_string(),
                        password: get(values, "password").to_string(),
                        security: get(values, "security").to_string(),
                    })
                } else {
                    Self::Network(NetworkPayload::Login {
                        login_url: get(values, "loginUrl").to_string(),
                    })
                }
            }
            "creative-fun" => Self::Creative {
                reveal_url: get(values, "revealUrl").to_string(),
                content: get(values, "content").to_string(),
            },
            _ => Self::Unknown(
                values
                    .iter()
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect(),
            ),
        }
    }

    /// Produce the final QR payload string.
    pub fn render(&self) -> String {
        match self {
            Self::Website { url } => url.clone(),
            Self::Contact(contact) => contact.render(),
            Self::Document { file_url } => file_url.clone(),
            Self::Payment(payment) => payment.render(),
            Self::Business(business) => business.render(),
            Self::Event(event) => event.render(),
            Self::Location(location) => location.render(),
            Self::Media { media_url } => media_url.clone(),
            Self::Network(network) => network.render(),
            Self::Creative { reveal_url, content } => {
                if reveal_url.is_empty() {
                    content.clone()
                } else {
                    reveal_url.clone()
                }
            }
            // BTreeMap keeps the serialized key order deterministic.
            Self::Unknown(values) => {
                serde_json::to_string(values).unwrap_or_default()
            }
        }
    }
}

impl ContactPayload {
    fn render(&self) -> String {
        match self.kind {
            ContactKind::VCard => format!(
                "BEGIN:VCARD\nVERSION:3.0\nFN:{}\nTEL:{}\nEMAIL:{}\nEND:VCARD",
                self.name, self.phone, self.email
            ),
            ContactKind::Phone => format!("tel:{}", self.phone),
            ContactKind::Sms => format!(
                "sms:{}?body={}",
                self.phone,
                encode_component(&self.message)
            ),
            ContactKind::Email => format!(
                "mailto:{}?subject={}",
                self.email,
                encode_component(&self.message)
            ),
            ContactKind::WhatsApp => {
                let digits: String = self
                    .phone
                    .chars()
                    .filter(char::is_ascii_digit)
                    .collect();
                format!(
                    "https://wa.me/{}?text={}",
                    digits,
                    encode_component(&self.message)
                )
            }
            ContactKind::Unknown => String::new(),
        }
    }
}

impl PaymentPayload {
    fn render(&self) -> String {
        match self {
            Self::Upi {
                recipient,
                amount,
                currency,
                note,
            } => {
                let currency = if currency.is_empty() { "INR" } else { currency };
                format!(
                    "upi://pay?pa={recipient}&am={amount}&cu={currency}&tn={}",
                    encode_component(note)
                )
            }
            Self::Direct { recipient } => recipient.clone(),
        }
    }
}

impl BusinessPayload {
    fn render(&self) -> String {
        match self {
            Self::Card {
                contact_person,
                business_name,
                phone,
                email,
                website,
                address,
            } => format!(
                "BEGIN:VCARD\nVERSION:3.0\nFN:{contact_person}\nORG:{business_name}\n\
                 TEL:{phone}\nEMAIL:{email}\nURL:{website}\nADR:;;{address};;;;\nEND:VCARD"
            ),
            Self::Link { website, email } => {
                if website.is_empty() {
                    email.clone()
                } else {
                    website.clone()
                }
            }
        }
    }
}

impl EventPayload {
    fn render(&self) -> String {
        // DTSTART uses the date with the dashes stripped (20241225 form).
        let dtstart = self.event_date.replace('-', "");
        format!(
            "BEGIN:VEVENT\nSUMMARY:{}\nDTSTART:{}\nLOCATION:{}\nDESCRIPTION:{}\nURL:{}\nEND:VEVENT",
            self.event_name, dtstart, self.location, self.description, self.rsvp_url
        )
    }
}

impl LocationPayload {
    fn render(&self) -> String {
        match &self.coordinates {
            Some(coords) => {
                let query = format!("{}, {}", self.location_name, self.address);
                format!("geo:{coords}?q={}", encode_component(&query))
            }
            None => format!(
                "https://maps.google.com/maps?q={}",
                encode_component(&self.address)
            ),
        }
    }
}

impl NetworkPayload {
    fn render(&self) -> String {
        match self {
            Self::Wifi {
                ssid,
                password,
                security,
            } => {
                let security = if security.is_empty() { "WPA2" } else { security };
                format!("WIFI:T:{security};S:{ssid};P:{password};H:false;;")
            }
            Self::Login { login_url } => login_url.clone(),
        }
    }
}

/// Encoder call boundary: classify and render in one step.
pub fn encode(category_id: &str, values: &HashMap<String, String>) -> String {
    Payload::from_values(category_id, values).render()
}
