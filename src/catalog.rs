// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Category, TransactionKind};

/// Fallback color for category ids the catalog no longer knows.
pub const UNKNOWN_CATEGORY_COLOR: &str = "#B0B0B0";

pub const CATEGORIES: &[Category] = &[
    // Expense categories
    Category { id: "food", name: "Food", emoji: "🍕", kind: TransactionKind::Expense, color: "#FF6B6B" },
    Category { id: "transport", name: "Transport", emoji: "🚗", kind: TransactionKind::Expense, color: "#45B7D1" },
    Category { id: "shopping", name: "Shopping", emoji: "🛍️", kind: TransactionKind::Expense, color: "#FFA726" },
    Category { id: "entertainment", name: "Fun", emoji: "🎮", kind: TransactionKind::Expense, color: "#AB47BC" },
    Category { id: "bills", name: "Bills", emoji: "📄", kind: TransactionKind::Expense, color: "#78909C" },
    Category { id: "health", name: "Health", emoji: "💊", kind: TransactionKind::Expense, color: "#EF5350" },
    Category { id: "coffee", name: "Coffee", emoji: "☕", kind: TransactionKind::Expense, color: "#8D6E63" },
    Category { id: "other-expense", name: "Other", emoji: "📦", kind: TransactionKind::Expense, color: "#B0B0B0" },
    // Income categories
    Category { id: "salary", name: "Salary", emoji: "💰", kind: TransactionKind::Income, color: "#66BB6A" },
    Category { id: "freelance", name: "Freelance", emoji: "💻", kind: TransactionKind::Income, color: "#26A69A" },
    Category { id: "gift", name: "Gift", emoji: "🎁", kind: TransactionKind::Income, color: "#EC407A" },
    Category { id: "investment", name: "Investment", emoji: "📈", kind: TransactionKind::Income, color: "#42A5F5" },
    Category { id: "other-income", name: "Other", emoji: "✨", kind: TransactionKind::Income, color: "#FFCA28" },
];

pub fn category_by_id(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.id == id)
}

pub fn categories_for(kind: TransactionKind) -> Vec<&'static Category> {
    CATEGORIES.iter().filter(|c| c.kind == kind).collect()
}

pub const AVATARS: &[&str] = &[
    "😊", "😎", "🤩", "🥳", "😇", "🤓", "🦊", "🐱", "🐶", "🦄", "🌟", "💎",
];

pub const WALLET_EMOJIS: &[&str] = &["💳", "🏦", "💰", "🪙", "💵", "🐷", "🎯", "⭐"];

pub const DEFAULT_WALLET_NAME: &str = "Main Wallet";
pub const DEFAULT_WALLET_EMOJI: &str = "💳";
pub const DEFAULT_WALLET_CURRENCY: &str = "USD";

/// Bundled currency table backing the settings picker. Wallet creation uses
/// the remote catalog instead; this one only maps a code to a display symbol.
pub struct CurrencyInfo {
    pub code: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
}

pub const CURRENCIES: &[CurrencyInfo] = &[
    CurrencyInfo { code: "USD", symbol: "$", name: "US Dollar" },
    CurrencyInfo { code: "EUR", symbol: "€", name: "Euro" },
    CurrencyInfo { code: "GBP", symbol: "£", name: "British Pound" },
    CurrencyInfo { code: "JPY", symbol: "¥", name: "Japanese Yen" },
    CurrencyInfo { code: "INR", symbol: "₹", name: "Indian Rupee" },
    CurrencyInfo { code: "CAD", symbol: "C$", name: "Canadian Dollar" },
    CurrencyInfo { code: "AUD", symbol: "A$", name: "Australian Dollar" },
    CurrencyInfo { code: "CNY", symbol: "¥", name: "Chinese Yuan" },
    CurrencyInfo { code: "KRW", symbol: "₩", name: "South Korean Won" },
    CurrencyInfo { code: "VND", symbol: "₫", name: "Vietnamese Dong" },
    CurrencyInfo { code: "BRL", symbol: "R$", name: "Brazilian Real" },
    CurrencyInfo { code: "CHF", symbol: "Fr", name: "Swiss Franc" },
];

pub fn currency_info(code: &str) -> Option<&'static CurrencyInfo> {
    CURRENCIES.iter().find(|c| c.code.eq_ignore_ascii_case(code))
}
