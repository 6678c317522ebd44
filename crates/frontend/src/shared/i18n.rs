//! Static translation table for the configuration screens

use contracts::shared::language::Language;
use leptos::prelude::*;

/// (key, english, farsi, pashto)
const TABLE: &[(&str, &str, &str, &str)] = &[
    ("add_expense_type", "Add expense type", "افزودن نوع مصرف", "د لګښت ډول زیات کړئ"),
    ("search", "Search", "جستجو", "لټون"),
    ("id", "ID", "شناسه", "پېژند"),
    ("name", "Name", "نام", "نوم"),
    ("date", "Date", "تاریخ", "نېټه"),
    ("edit", "Edit", "ویرایش", "سمون"),
    ("view", "View", "مشاهده", "کتل"),
    ("add", "Add", "افزودن", "زیاتول"),
    ("translate_en", "Name in English", "نام به انگلیسی", "نوم په انګلیسي"),
    ("translate_fa", "Name in Farsi", "نام به فارسی", "نوم په فارسي"),
    ("translate_ps", "Name in Pashto", "نام به پشتو", "نوم په پښتو"),
    ("en", "English", "انگلیسی", "انګلیسي"),
    ("fa", "Farsi", "فارسی", "فارسي"),
    ("ps", "Pashto", "پشتو", "پښتو"),
    ("required", "This field is required.", "این فیلد الزامی است.", "دا ساحه اړینه ده."),
    ("picture", "Picture", "تصویر", "انځور"),
    ("action", "Action", "عملیات", "کړنه"),
    ("cancel", "Cancel", "لغو", "لغوه"),
    ("save", "Save", "ذخیره", "خوندي کول"),
    (
        "atleast_one_ico",
        "Select at least one icon.",
        "حداقل یک آیکون را انتخاب کنید.",
        "لږ تر لږه یو انځورک وټاکئ.",
    ),
    ("expense_type", "Expense type", "نوع مصرف", "د لګښت ډول"),
    ("configurations", "Configurations", "تنظیمات", "تنظیمات"),
    ("saved", "Saved successfully.", "با موفقیت ذخیره شد.", "په بریالیتوب خوندي شو."),
    ("request_failed", "Request failed.", "درخواست ناموفق بود.", "غوښتنه ناکامه شوه."),
    ("no_records", "No records found.", "هیچ رکوردی یافت نشد.", "هېڅ ریکارډ ونه موندل شو."),
    ("language", "Language", "زبان", "ژبه"),
];

/// Translation of `key`, falling back to English and then to the key itself
pub fn tr(lang: Language, key: &str) -> String {
    let Some(&(_, en, fa, ps)) = TABLE.iter().find(|(k, ..)| *k == key) else {
        return key.to_string();
    };
    let text = match lang {
        Language::English => en,
        Language::Farsi => fa,
        Language::Pashto => ps,
    };
    let text = if text.is_empty() { en } else { text };
    text.to_string()
}

/// Current UI language, provided at the app root
#[derive(Clone, Copy)]
pub struct I18nContext {
    pub lang: RwSignal<Language>,
}

impl I18nContext {
    pub fn new(lang: Language) -> Self {
        Self {
            lang: RwSignal::new(lang),
        }
    }

    /// Reactive translation
    pub fn t(&self, key: &'static str) -> Signal<String> {
        let lang = self.lang;
        Signal::derive(move || tr(lang.get(), key))
    }

    /// Translation without subscribing
    pub fn t_now(&self, key: &str) -> String {
        tr(self.lang.get_untracked(), key)
    }

    pub fn current(&self) -> Language {
        self.lang.get_untracked()
    }
}

pub fn use_i18n() -> I18nContext {
    use_context::<I18nContext>().expect("I18nContext not provided in context (provide it in app root)")
}
