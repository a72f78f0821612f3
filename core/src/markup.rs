#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Name,
    Bio,
    Instagram,
    Twitter,
    Youtube,
    Linkedin,
    Github,
    CustomLabel,
    CustomUrl,
}

impl FieldId {
    /// Every watched input, in markup order.
    pub const ALL: [FieldId; 9] = [
        FieldId::Name,
        FieldId::Bio,
        FieldId::Instagram,
        FieldId::Twitter,
        FieldId::Youtube,
        FieldId::Linkedin,
        FieldId::Github,
        FieldId::CustomLabel,
        FieldId::CustomUrl,
    ];

    pub fn input_id(self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Bio => "bio",
            FieldId::Instagram => "instagram",
            FieldId::Twitter => "twitter",
            FieldId::Youtube => "youtube",
            FieldId::Linkedin => "linkedin",
            FieldId::Github => "github",
            FieldId::CustomLabel => "customLabel",
            FieldId::CustomUrl => "customUrl",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputId {
    PreviewName,
    PreviewBio,
    LinkInstagram,
    LinkTwitter,
    LinkYoutube,
    LinkLinkedin,
    LinkGithub,
    LinkCustom,
    LinkCustomLabel,
}

impl OutputId {
    pub const ALL: [OutputId; 9] = [
        OutputId::PreviewName,
        OutputId::PreviewBio,
        OutputId::LinkInstagram,
        OutputId::LinkTwitter,
        OutputId::LinkYoutube,
        OutputId::LinkLinkedin,
        OutputId::LinkGithub,
        OutputId::LinkCustom,
        OutputId::LinkCustomLabel,
    ];

    pub fn element_id(self) -> &'static str {
        match self {
            OutputId::PreviewName => "previewName",
            OutputId::PreviewBio => "previewBio",
            OutputId::LinkInstagram => "linkInstagram",
            OutputId::LinkTwitter => "linkTwitter",
            OutputId::LinkYoutube => "linkYoutube",
            OutputId::LinkLinkedin => "linkLinkedin",
            OutputId::LinkGithub => "linkGithub",
            OutputId::LinkCustom => "linkCustom",
            OutputId::LinkCustomLabel => "linkCustomLabel",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialLink {
    Instagram,
    Twitter,
    Youtube,
    Linkedin,
    Github,
}

impl SocialLink {
    pub const ALL: [SocialLink; 5] = [
        SocialLink::Instagram,
        SocialLink::Twitter,
        SocialLink::Youtube,
        SocialLink::Linkedin,
        SocialLink::Github,
    ];

    pub fn field(self) -> FieldId {
        match self {
            SocialLink::Instagram => FieldId::Instagram,
            SocialLink::Twitter => FieldId::Twitter,
            SocialLink::Youtube => FieldId::Youtube,
            SocialLink::Linkedin => FieldId::Linkedin,
            SocialLink::Github => FieldId::Github,
        }
    }

    pub fn output(self) -> OutputId {
        match self {
            SocialLink::Instagram => OutputId::LinkInstagram,
            SocialLink::Twitter => OutputId::LinkTwitter,
            SocialLink::Youtube => OutputId::LinkYoutube,
            SocialLink::Linkedin => OutputId::LinkLinkedin,
            SocialLink::Github => OutputId::LinkGithub,
        }
    }
}

pub const COPY_BUTTON_ID: &str = "copyLinkBtn";
pub const PUBLIC_LINK_ID: &str = "publicLink";
pub const TOAST_ID: &str = "copyToast";

pub const NAME_PLACEHOLDER: &str = "Your Name";
pub const BIO_PLACEHOLDER: &str = "Your bio will appear here. Make it short, cute, and very you.";
pub const CUSTOM_LINK_DEFAULT_LABEL: &str = "Custom Link";
