//! Static category/field catalog
//!
//! Ten fixed QR content categories, each with its own field schema. The
//! records are plain data: the only behavior keyed on them is the payload
//! dispatch in `qr::payload`.

use ratatui::style::Color;

/// Input kind for a single form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Url,
    TextArea,
    Select,
    Number,
}

/// Definition of one named input slot within a category's schema.
#[derive(Debug, Clone, Copy)]
pub struct FieldDef {
    pub name: &'static str,
    pub kind: FieldKind,
    pub label: &'static str,
    pub placeholder: Option<&'static str>,
    pub required: bool,
    pub options: &'static [&'static str],
}

impl FieldDef {
    const fn new(name: &'static str, kind: FieldKind, label: &'static str) -> Self {
        Self {
            name,
            kind,
            label,
            placeholder: None,
            required: false,
            options: &[],
        }
    }

    const fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    const fn options(mut self, options: &'static [&'static str]) -> Self {
        self.options = options;
        self
    }
}

/// One of the ten fixed QR content categories.
#[derive(Debug, Clone, Copy)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Accent color used for the sidebar marker and form header.
    pub color: Color,
    pub fields: &'static [FieldDef],
}

impl Category {
    /// Fields that must be non-empty before the encoder is invoked.
    pub fn required_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter().filter(|f| f.required)
    }
}

/// The full catalog, in display order.
pub const CATEGORIES: &[Category] = &[
    Category {
        id: "website-links",
        name: "Website & Links",
        description: "Create QR codes for websites, social media, and online content",
        color: Color::Blue,
        fields: &[
            FieldDef::new("url", FieldKind::Url, "Website URL")
                .placeholder("https://example.com")
                .required(),
            FieldDef::new("title", FieldKind::Text, "Title (Optional)").placeholder("My Website"),
        ],
    },
    Category {
        id: "contact-communication",
        name: "Contact & Communication",
        description: "Share contact details, phone numbers, and communication links",
        color: Color::Green,
        fields: &[
            FieldDef::new("type", FieldKind::Select, "Contact Type")
                .options(&["vCard", "Phone", "SMS", "Email", "WhatsApp"])
                .required(),
            FieldDef::new("name", FieldKind::Text, "Full Name")
                .placeholder("John Doe")
                .required(),
            FieldDef::new("phone", FieldKind::Tel, "Phone Number")
                .placeholder("+1234567890")
                .required(),
            FieldDef::new("email", FieldKind::Email, "Email Address")
                .placeholder("john@example.com"),
            FieldDef::new("message", FieldKind::TextArea, "Message (for SMS/WhatsApp)")
                .placeholder("Hello! Nice to connect with you."),
        ],
    },
    Category {
        id: "documents-files",
        name: "Documents & Files",
        description: "Link to downloadable files, documents, and resources",
        color: Color::Magenta,
        fields: &[
            FieldDef::new("fileUrl", FieldKind::Url, "File URL")
                .placeholder("https://example.com/document.pdf")
                .required(),
            FieldDef::new("fileName", FieldKind::Text, "File Name")
                .placeholder("Document.pdf")
                .required(),
            FieldDef::new("description", FieldKind::TextArea, "Description")
                .placeholder("Brief description of the file"),
        ],
    },
    Category {
        id: "payments-donations",
        name: "Payments & Donations",
        description: "Create payment links and donation QR codes",
        color: Color::Yellow,
        fields: &[
            FieldDef::new("paymentType", FieldKind::Select, "Payment Type")
                .options(&["UPI", "PayPal", "Stripe", "Crypto", "Donation"])
                .required(),
            FieldDef::new("recipient", FieldKind::Text, "Recipient")
                .placeholder("john@upi or wallet address")
                .required(),
            FieldDef::new("amount", FieldKind::Number, "Amount (Optional)").placeholder("10.00"),
            FieldDef::new("currency", FieldKind::Text, "Currency").placeholder("USD"),
            FieldDef::new("note", FieldKind::Text, "Payment Note").placeholder("Payment for..."),
        ],
    },
    Category {
        id: "business-marketing",
        name: "Business & Marketing",
        description: "Digital business cards, promotions, and marketing materials",
        color: Color::LightBlue,
        fields: &[
            FieldDef::new("businessType", FieldKind::Select, "Business Type")
                .options(&["Business Card", "Promotion", "Menu", "Review", "Loyalty"])
                .required(),
            FieldDef::new("businessName", FieldKind::Text, "Business Name")
                .placeholder("ABC Company")
                .required(),
            FieldDef::new("contactPerson", FieldKind::Text, "Contact Person")
                .placeholder("John Doe"),
            FieldDef::new("phone", FieldKind::Tel, "Phone").placeholder("+1234567890"),
            FieldDef::new("email", FieldKind::Email, "Email").placeholder("info@company.com"),
            FieldDef::new("website", FieldKind::Url, "Website").placeholder("https://company.com"),
            FieldDef::new("address", FieldKind::TextArea, "Address")
                .placeholder("123 Business St, City, State"),
        ],
    },
    Category {
        id: "events-ticketing",
        name: "Events & Ticketing",
        description: "Event invitations, tickets, and RSVP forms",
        color: Color::LightMagenta,
        fields: &[
            FieldDef::new("eventName", FieldKind::Text, "Event Name")
                .placeholder("Birthday Party")
                .required(),
            FieldDef::new("eventDate", FieldKind::Text, "Event Date").placeholder("2024-12-25"),
            FieldDef::new("eventTime", FieldKind::Text, "Event Time").placeholder("7:00 PM"),
            FieldDef::new("location", FieldKind::TextArea, "Location")
                .placeholder("123 Party Ave, City"),
            FieldDef::new("rsvpUrl", FieldKind::Url, "RSVP URL (Optional)")
                .placeholder("https://rsvp.com/event"),
            FieldDef::new("description", FieldKind::TextArea, "Event Description")
                .placeholder("Join us for a celebration!"),
        ],
    },
    Category {
        id: "location-navigation",
        name: "Location & Navigation",
        description: "Share locations, addresses, and navigation links",
        color: Color::Red,
        fields: &[
            FieldDef::new("locationName", FieldKind::Text, "Location Name")
                .placeholder("My Store")
                .required(),
            FieldDef::new("address", FieldKind::TextArea, "Full Address")
                .placeholder("123 Main St, City, State, ZIP")
                .required(),
            FieldDef::new("coordinates", FieldKind::Text, "GPS Coordinates (Optional)")
                .placeholder("40.7128,-74.0060"),
            FieldDef::new("instructions", FieldKind::TextArea, "Directions/Instructions")
                .placeholder("Additional navigation help"),
        ],
    },
    Category {
        id: "media-entertainment",
        name: "Media & Entertainment",
        description: "Share music, videos, and entertainment content",
        color: Color::LightRed,
        fields: &[
            FieldDef::new("mediaType", FieldKind::Select, "Media Type")
                .options(&["Music", "Video", "Playlist", "Photo Gallery", "AR/VR"])
                .required(),
            FieldDef::new("mediaUrl", FieldKind::Url, "Media URL")
                .placeholder("https://spotify.com/playlist/...")
                .required(),
            FieldDef::new("title", FieldKind::Text, "Title")
                .placeholder("My Awesome Playlist")
                .required(),
            FieldDef::new("artist", FieldKind::Text, "Artist/Creator").placeholder("Artist Name"),
            FieldDef::new("description", FieldKind::TextArea, "Description")
                .placeholder("About this content..."),
        ],
    },
    Category {
        id: "wifi-auth",
        name: "WiFi & Authentication",
        description: "WiFi access codes and authentication setup",
        color: Color::Cyan,
        fields: &[
            FieldDef::new("authType", FieldKind::Select, "Type")
                .options(&["WiFi", "2FA Setup", "Login"])
                .required(),
            FieldDef::new("networkName", FieldKind::Text, "Network Name (SSID)")
                .placeholder("MyWiFi"),
            FieldDef::new("password", FieldKind::Text, "Password").placeholder("wifi-password"),
            FieldDef::new("security", FieldKind::Select, "Security Type")
                .options(&["WPA2", "WPA3", "WEP", "None"]),
            FieldDef::new("loginUrl", FieldKind::Url, "Login URL (Optional)")
                .placeholder("https://login.example.com"),
        ],
    },
    Category {
        id: "creative-fun",
        name: "Creative & Fun",
        description: "Hidden messages, games, and creative uses",
        color: Color::LightCyan,
        fields: &[
            FieldDef::new("creativeType", FieldKind::Select, "Creative Type")
                .options(&["Hidden Message", "Game", "Treasure Hunt", "Surprise", "Art"])
                .required(),
            FieldDef::new("title", FieldKind::Text, "Title")
                .placeholder("Secret Message")
                .required(),
            FieldDef::new("content", FieldKind::TextArea, "Content/Message")
                .placeholder("Your hidden message or instructions...")
                .required(),
            FieldDef::new("revealUrl", FieldKind::Url, "Reveal URL (Optional)")
                .placeholder("https://surprise.com"),
        ],
    },
];

/// Look up a category by its id.
pub fn category_by_id(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.id == id)
}
