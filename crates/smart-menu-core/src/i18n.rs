//! Translations
//!
//! Three dictionaries keyed by camelCase message keys. Lookups fall back to
//! English, then to the key itself, so a missing translation never blanks a
//! label.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Sw,
    Fr,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Sw, Language::Fr];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Sw => "sw",
            Language::Fr => "fr",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Sw => "Kiswahili",
            Language::Fr => "Français",
        }
    }

    pub fn flag(&self) -> &'static str {
        match self {
            Language::En => "🇬🇧",
            Language::Sw => "🇹🇿",
            Language::Fr => "🇫🇷",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.code() == code.trim())
    }

    fn table(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Language::En => EN,
            Language::Sw => SW,
            Language::Fr => FR,
        }
    }
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Message for `key` in `lang`, else in English, else `key` itself
pub fn translate<'a>(lang: Language, key: &'a str) -> &'a str {
    lookup(lang.table(), key)
        .or_else(|| lookup(EN, key))
        .unwrap_or(key)
}

/// Every key the English dictionary defines
pub fn keys() -> impl Iterator<Item = &'static str> {
    EN.iter().map(|(k, _)| *k)
}

// ========================
// English
// ========================

static EN: &[(&str, &str)] = &[
    // Shell
    ("appName", "Smart Menu"),
    ("dashboard", "Dashboard"),
    ("manageMenu", "Manage Menu"),
    ("todaysMenu", "Today's Menu"),
    ("orders", "Orders"),
    ("customerFeedback", "Customer Feedback"),
    ("reports", "Reports"),
    ("qrCodes", "QR Codes"),
    ("settings", "Settings"),
    ("logout", "Logout"),
    ("language", "Language"),
    ("welcome", "Welcome"),
    ("toggleMenu", "Toggle menu"),
    // Common
    ("id", "ID"),
    ("name", "Name"),
    ("description", "Description"),
    ("price", "Price"),
    ("category", "Category"),
    ("stock", "Stock"),
    ("status", "Status"),
    ("actions", "Actions"),
    ("date", "Date"),
    ("cancel", "Cancel"),
    ("save", "Save"),
    ("edit", "Edit"),
    ("copy", "Copy"),
    ("delete", "Delete"),
    ("confirm", "Confirm"),
    ("close", "Close"),
    ("refresh", "Refresh"),
    ("available", "Available"),
    ("notAvailable", "Not Available"),
    ("required", "*"),
    ("previous", "Previous"),
    ("next", "Next"),
    ("showing", "Showing"),
    ("to", "to"),
    ("of", "of"),
    ("search", "Search"),
    ("filter", "Filter"),
    ("clearFilter", "Clear"),
    ("all", "All"),
    ("loadingGeneric", "Loading..."),
    ("errorGeneric", "Something went wrong. Please try again."),
    ("networkError", "Cannot reach the server. Check your connection."),
    ("notFoundTitle", "404"),
    ("notFound", "Page not found"),
    ("goHome", "Go Home"),
    // Auth
    ("login", "Login"),
    ("loginSubtitle", "Sign in to manage your restaurant"),
    ("username", "Username"),
    ("password", "Password"),
    ("signIn", "Sign In"),
    ("signingIn", "Signing in..."),
    ("noAccount", "Don't have an account?"),
    ("register", "Register"),
    ("createAccount", "Create Account"),
    ("registerSubtitle", "Set up your restaurant in minutes"),
    ("email", "Email"),
    ("fullName", "Full Name"),
    ("restaurantName", "Restaurant Name"),
    ("haveAccount", "Already have an account?"),
    ("creatingAccount", "Creating account..."),
    ("loginSuccess", "Login successful! Redirecting..."),
    ("registerSuccess", "Registration successful! Redirecting to login..."),
    ("credentialsRequired", "Username and password are required"),
    ("usernameLength", "Username must be 3-20 characters"),
    ("invalidEmail", "Please enter a valid email address"),
    ("passwordLength", "Password must be 6-40 characters"),
    ("passwordMismatch", "New passwords do not match"),
    ("passwordStrength", "Password strength"),
    ("passwordWeak", "Weak"),
    ("passwordMedium", "Medium"),
    ("passwordStrong", "Strong"),
    // Menu management
    ("menuItems", "Menu Items"),
    ("menuSubtitle", "Manage your restaurant menu items"),
    ("addMenuItem", "Add Menu Item"),
    ("editMenuItem", "Edit Menu Item"),
    ("nameLabel", "Name"),
    ("descriptionLabel", "Description"),
    ("priceLabel", "Price (TSH)"),
    ("categoryLabel", "Category"),
    ("stockLabel", "Stock Quantity"),
    ("photoLabel", "Photo"),
    ("availableLabel", "Available for ordering"),
    ("mainDishes", "Main Dishes"),
    ("sides", "Sides"),
    ("drinks", "Drinks"),
    ("desserts", "Desserts"),
    ("selectCategory", "Select category"),
    ("addItem", "Add Item"),
    ("updateItem", "Update Item"),
    ("loading", "Loading menu items..."),
    ("noData", "No menu items found. Click \"Add Menu Item\" to create one."),
    ("itemAdded", "Menu item added successfully!"),
    ("itemUpdated", "Menu item updated successfully!"),
    ("itemDeleted", "Menu item deleted successfully!"),
    ("deleteConfirm", "Are you sure you want to delete this item?"),
    ("nameRequired", "Name is required"),
    ("priceRequired", "Price must be greater than 0"),
    ("categoryRequired", "Category is required"),
    ("stockInvalid", "Stock must be a whole number"),
    ("fileTooLarge", "File size must be less than 2MB"),
    ("invalidFileType", "Please upload an image file (JPEG, PNG)"),
    ("namePlaceholder", "e.g., Ugali & Fish"),
    ("descriptionPlaceholder", "Describe your dish..."),
    ("pricePlaceholder", "e.g., 15000"),
    ("stockPlaceholder", "e.g., 50"),
    ("fileHint", "Max 2MB, JPEG or PNG only"),
    // Daily menu
    ("dailyMenu", "Daily Menu"),
    ("dailyMenuSubtitle", "Manage menu items available for specific dates"),
    ("selectDate", "Select Date"),
    ("viewMenu", "View Menu"),
    ("addToDailyMenu", "Add to Daily Menu"),
    ("editDailyMenuItem", "Edit Daily Menu Item"),
    ("menuItem", "Menu Item"),
    ("selectItem", "Select item"),
    ("specialPrice", "Special Price (TSH)"),
    ("specialPriceOptional", "Special Price (optional)"),
    ("originalPrice", "Original Price"),
    ("photo", "Photo"),
    ("noDailyMenuItems", "No items in the daily menu for this date."),
    ("itemAddedToDailyMenu", "Item added to daily menu successfully!"),
    ("itemUpdatedInDailyMenu", "Daily menu item updated successfully!"),
    ("itemRemovedFromDailyMenu", "Item removed from daily menu successfully!"),
    ("removeDailyMenuConfirm", "Are you sure you want to remove this item from the daily menu?"),
    ("menuItemRequired", "Please select a menu item"),
    ("specialPriceInvalid", "Special price cannot be negative"),
    // Orders
    ("ordersSubtitle", "Track and manage customer orders"),
    ("orderNumber", "Order #"),
    ("table", "Table"),
    ("customer", "Customer"),
    ("items", "Items"),
    ("total", "Total"),
    ("payment", "Payment"),
    ("time", "Time"),
    ("allStatuses", "All Statuses"),
    ("searchOrders", "Search by order, table or customer..."),
    ("noOrders", "No orders found."),
    ("loadingOrders", "Loading orders..."),
    ("statusPending", "Pending"),
    ("statusConfirmed", "Confirmed"),
    ("statusPreparing", "Preparing"),
    ("statusReady", "Ready"),
    ("statusCompleted", "Completed"),
    ("statusCancelled", "Cancelled"),
    ("paymentPending", "Unpaid"),
    ("paymentCompleted", "Paid"),
    ("markPaid", "Mark Paid"),
    ("markUnpaid", "Mark Unpaid"),
    ("orderDetails", "Order Details"),
    ("viewDetails", "View"),
    ("orderStatusUpdated", "Order status updated!"),
    ("paymentUpdated", "Payment status updated!"),
    ("orderDeleted", "Order deleted!"),
    ("deleteOrderConfirm", "Delete this order?"),
    ("quantity", "Qty"),
    ("subtotal", "Subtotal"),
    ("tax", "Tax"),
    ("specialInstructions", "Special instructions"),
    ("customerNotes", "Notes"),
    ("pendingOrders", "Pending Orders"),
    // Feedback
    ("feedbackSubtitle", "See what your customers are saying"),
    ("rating", "Rating"),
    ("comments", "Comments"),
    ("amount", "Amount"),
    ("allRatings", "All Ratings"),
    ("averageRating", "Average Rating"),
    ("totalFeedback", "Total Feedback"),
    ("ratingDistribution", "Rating Distribution"),
    ("sortBy", "Sort By"),
    ("sortNewest", "Newest first"),
    ("sortOldest", "Oldest first"),
    ("sortHighestRating", "Highest rating"),
    ("sortLowestRating", "Lowest rating"),
    ("startDate", "Start Date"),
    ("endDate", "End Date"),
    ("noFeedback", "No feedback yet."),
    ("noComments", "No comments"),
    ("feedbackDeleted", "Feedback deleted!"),
    ("deleteFeedbackConfirm", "Delete this feedback?"),
    ("loadingFeedback", "Loading feedback..."),
    // Reports
    ("reportsSubtitle", "Sales and order insights"),
    ("filterReports", "Filter Reports"),
    ("dateFrom", "From"),
    ("dateTo", "To"),
    ("keyMetrics", "Key Metrics"),
    ("totalRevenue", "Total Revenue"),
    ("totalOrders", "Total Orders"),
    ("ordersByStatus", "Orders by Status"),
    ("topSellingItems", "Top Selling Items"),
    ("item", "Item Name"),
    ("unitsSold", "Quantity Sold"),
    ("noSalesData", "No sales data for this period."),
    ("loadingReports", "Loading reports..."),
    // Dashboard
    ("dashboardSubtitle", "Overview of your restaurant today"),
    ("totalSales", "Total Sales"),
    ("activeItems", "Active Menu Items"),
    ("tablesCount", "Tables"),
    ("recentOrders", "Recent Orders"),
    ("recentFeedback", "Recent Feedback"),
    ("topItems", "Top Items"),
    ("viewAll", "View All"),
    ("loadingDashboard", "Loading dashboard..."),
    ("noRecentOrders", "No recent orders."),
    ("noRecentFeedback", "No recent feedback."),
    // QR codes
    ("qrCodesSubtitle", "Generate QR codes for your tables and rooms"),
    ("addTable", "Add Table"),
    ("tableNumber", "Table Number"),
    ("tableNumberPlaceholder", "e.g., T1 or Room 12"),
    ("location", "Location"),
    ("locationPlaceholder", "e.g., Terrace"),
    ("type", "Type"),
    ("tableTypeTable", "Table"),
    ("tableTypeRoom", "Room"),
    ("isRoom", "This is a room"),
    ("printSelected", "Print Selected"),
    ("selectAll", "Select All"),
    ("openMenu", "Open Menu"),
    ("tableAdded", "Table added successfully!"),
    ("tableDeleted", "Table deleted!"),
    ("deleteTableConfirm", "Delete this table and its QR code?"),
    ("noTables", "No tables yet. Add one to generate its QR code."),
    ("noTablesSelected", "Select at least one QR code to print."),
    ("tableNumberRequired", "Table number is required"),
    ("tableNumberTooLong", "Table number cannot exceed 50 characters"),
    ("locationTooLong", "Location cannot exceed 100 characters"),
    ("loadingTables", "Loading tables..."),
    ("scanToOrder", "Scan to view the menu and order"),
    // Settings
    ("settingsSubtitle", "Manage your account and restaurant preferences"),
    ("profile", "Profile"),
    ("restaurant", "Restaurant"),
    ("preferences", "Preferences"),
    ("role", "Role"),
    ("currentPassword", "Current Password"),
    ("newPassword", "New Password"),
    ("confirmPassword", "Confirm New Password"),
    ("saveChanges", "Save Changes"),
    ("settingsSaved", "Settings saved!"),
    ("passwordValidated", "New password is valid. It is not sent to the server from this screen."),
    ("noPasswordChange", "No new password entered"),
    ("checkPassword", "Check Password"),
    ("currency", "Currency"),
    ("timezone", "Timezone"),
    ("openingTime", "Opening Time"),
    ("closingTime", "Closing Time"),
    ("serviceCharge", "Service Charge (%)"),
    ("vatRate", "VAT Rate (%)"),
    ("receiptFooter", "Receipt Footer"),
    ("allowOnlineOrders", "Allow online orders"),
    ("autoAcceptOrders", "Auto-accept new orders"),
    ("dateFormat", "Date Format"),
    ("timeFormat", "Time Format"),
    ("notifications", "Notifications"),
    ("emailNotifications", "Email notifications"),
    ("smsNotifications", "SMS notifications"),
    ("orderNotifications", "New order alerts"),
    ("feedbackNotifications", "New feedback alerts"),
    ("percentOutOfRange", "Percentages must be between 0 and 100"),
    ("sessionRequired", "Your session has ended, please log in again"),
    ("apiBaseUrl", "Backend URL"),
    ("apiBaseUrlHint", "Leave empty to use the default server"),
    ("testConnection", "Test connection"),
    ("connectionOk", "Server reachable"),
    ("connectionFailed", "Cannot reach the server"),
    // Customer menu
    ("customerWelcome", "Karibu! Browse our menu and order from your table."),
    ("customerWelcomeBack", "Welcome back! Great to see you again."),
    ("menuTitle", "Our Menu"),
    ("allItems", "All"),
    ("addToCart", "Add to Cart"),
    ("cart", "Your Order"),
    ("viewCart", "View Cart"),
    ("cartEmpty", "Your cart is empty"),
    ("remove", "Remove"),
    ("yourName", "Your Name"),
    ("yourNamePlaceholder", "Enter your name"),
    ("specialInstructionsPlaceholder", "e.g., no onions"),
    ("placeOrder", "Place Order"),
    ("placingOrder", "Placing order..."),
    ("orderPlaced", "Order placed successfully!"),
    ("customerNameRequired", "Please enter your name to place an order"),
    ("itemAddedToCart", "Added to cart!"),
    ("noTableSelected", "No table selected. Please scan the QR code on your table."),
    ("loadingMenu", "Loading menu..."),
    ("noMenuItems", "No items available right now."),
    ("menuLoadFailed", "We could not load the menu for this table."),
    ("retry", "Try again"),
    // Order tracking
    ("trackOrder", "Track Your Order"),
    ("noOrderNumber", "No order number provided."),
    ("orderNotFound", "Order not found."),
    ("loadingOrder", "Loading your order..."),
    ("orderPlacedAt", "Placed"),
    ("orderCancelled", "This order was cancelled."),
    ("orderReady", "Your order is ready!"),
    ("orderCompleted", "Enjoy your meal!"),
    ("autoRefresh", "This page updates automatically."),
    ("leaveFeedback", "Leave Feedback"),
    ("backToMenu", "Back to Menu"),
    // Customer feedback
    ("rateYourExperience", "How was your experience?"),
    ("tapToRate", "Tap a star to rate"),
    ("commentsPlaceholder", "Tell us more (optional)"),
    ("submitFeedback", "Submit Feedback"),
    ("submitting", "Submitting..."),
    ("thankYou", "Thank you for your feedback!"),
    ("redirecting", "Redirecting..."),
    ("ratingRequired", "Please select a rating"),
];

// ========================
// Kiswahili
// ========================

static SW: &[(&str, &str)] = &[
    ("dashboard", "Dashibodi"),
    ("manageMenu", "Simamia Menyu"),
    ("todaysMenu", "Menyu ya Leo"),
    ("orders", "Maagizo"),
    ("customerFeedback", "Maoni ya Wateja"),
    ("reports", "Ripoti"),
    ("qrCodes", "Misimbo ya QR"),
    ("settings", "Mipangilio"),
    ("logout", "Toka"),
    ("language", "Lugha"),
    ("welcome", "Karibu"),
    ("id", "Nambari"),
    ("name", "Jina"),
    ("description", "Maelezo"),
    ("price", "Bei"),
    ("category", "Aina"),
    ("stock", "Idadi"),
    ("status", "Hali"),
    ("actions", "Vitendo"),
    ("date", "Tarehe"),
    ("cancel", "Ghairi"),
    ("save", "Hifadhi"),
    ("edit", "Hariri"),
    ("copy", "Nakili"),
    ("delete", "Futa"),
    ("confirm", "Thibitisha"),
    ("close", "Funga"),
    ("available", "Inapatikana"),
    ("notAvailable", "Haipatikani"),
    ("previous", "Iliyotangulia"),
    ("next", "Inayofuata"),
    ("search", "Tafuta"),
    ("all", "Zote"),
    ("loadingGeneric", "Inapakia..."),
    ("errorGeneric", "Kuna hitilafu. Tafadhali jaribu tena."),
    ("notFound", "Ukurasa haukupatikana"),
    ("login", "Ingia"),
    ("username", "Jina la mtumiaji"),
    ("password", "Nenosiri"),
    ("signIn", "Ingia"),
    ("register", "Jisajili"),
    ("email", "Barua pepe"),
    ("menuItems", "Vyakula"),
    ("menuSubtitle", "Simamia vyakula vya mkahawa wako"),
    ("addMenuItem", "Ongeza Chakula"),
    ("editMenuItem", "Badilisha Chakula"),
    ("nameLabel", "Jina"),
    ("descriptionLabel", "Maelezo"),
    ("priceLabel", "Bei (TSH)"),
    ("categoryLabel", "Aina ya Chakula"),
    ("stockLabel", "Idadi ya Stock"),
    ("photoLabel", "Picha"),
    ("availableLabel", "Inapatikana kwa maagizo"),
    ("mainDishes", "Vyakula Vikuu"),
    ("sides", "Vyakula Vidogo"),
    ("drinks", "Vinywaji"),
    ("desserts", "Vitafunwa"),
    ("selectCategory", "Chagua aina"),
    ("addItem", "Ongeza Chakula"),
    ("updateItem", "Badilisha Chakula"),
    ("loading", "Inapakia vyakula..."),
    ("noData", "Hakuna chakula. Bonyeza \"Ongeza Chakula\" kutengeneza kipya."),
    ("itemAdded", "Chakula kimeongezwa!"),
    ("itemUpdated", "Chakula kimebadilishwa!"),
    ("itemDeleted", "Chakula kimefutwa!"),
    ("deleteConfirm", "Una uhakika unataka kufuta chakula hiki?"),
    ("nameRequired", "Jina linahitajika"),
    ("priceRequired", "Bei lazima iwe zaidi ya 0"),
    ("categoryRequired", "Aina ya chakula inahitajika"),
    ("fileTooLarge", "Ukubwa wa faili lazima usiwe zaidi ya 2MB"),
    ("invalidFileType", "Tafadhali pakia picha (JPEG, PNG)"),
    ("namePlaceholder", "mfano, Ugali na Samaki"),
    ("descriptionPlaceholder", "Eleza chakula chako..."),
    ("pricePlaceholder", "mfano, 15000"),
    ("stockPlaceholder", "mfano, 50"),
    ("fileHint", "Upeo wa 2MB, JPEG au PNG tu"),
    ("dailyMenu", "Menyu ya Siku"),
    ("dailyMenuSubtitle", "Simamia vyakula vinavyopatikana kwa siku maalum"),
    ("selectDate", "Chagua Tarehe"),
    ("viewMenu", "Ona Menyu"),
    ("addToDailyMenu", "Ongeza kwenye Menyu ya Siku"),
    ("menuItem", "Chakula"),
    ("selectItem", "Chagua chakula"),
    ("specialPrice", "Bei Maalum (TSH)"),
    ("specialPriceOptional", "Bei Maalum (hiari)"),
    ("originalPrice", "Bei ya Asili"),
    ("photo", "Picha"),
    ("noDailyMenuItems", "Hakuna vyakula kwenye menyu ya siku hii."),
    ("itemAddedToDailyMenu", "Chakula kimeongezwa kwenye menyu ya siku!"),
    ("itemUpdatedInDailyMenu", "Chakula kimebadilishwa kwenye menyu ya siku!"),
    ("itemRemovedFromDailyMenu", "Chakula kimeondolewa kutoka menyu ya siku!"),
    ("removeDailyMenuConfirm", "Una uhakika unataka kuondoa chakula hiki kutoka menyu ya siku?"),
    ("table", "Meza"),
    ("customer", "Mteja"),
    ("items", "Vyakula"),
    ("total", "Jumla"),
    ("statusPending", "Inasubiri"),
    ("statusConfirmed", "Imethibitishwa"),
    ("statusPreparing", "Inaandaliwa"),
    ("statusReady", "Iko Tayari"),
    ("statusCompleted", "Imekamilika"),
    ("statusCancelled", "Imeghairiwa"),
    ("paymentPending", "Haijalipwa"),
    ("paymentCompleted", "Imelipwa"),
    ("rating", "Ukadiriaji"),
    ("comments", "Maoni"),
    ("totalRevenue", "Mapato Jumla"),
    ("totalOrders", "Maagizo Jumla"),
    ("topSellingItems", "Vyakula Vinavyouzwa Zaidi"),
    ("tableTypeTable", "Meza"),
    ("tableTypeRoom", "Chumba"),
    ("customerWelcome", "Karibu! Angalia menyu yetu na uagize ukiwa mezani."),
    ("customerWelcomeBack", "Karibu tena! Tunafurahi kukuona tena."),
    ("menuTitle", "Menyu Yetu"),
    ("allItems", "Vyote"),
    ("addToCart", "Weka Kikapuni"),
    ("cart", "Agizo Lako"),
    ("viewCart", "Ona Kikapu"),
    ("cartEmpty", "Kikapu chako ni kitupu"),
    ("remove", "Ondoa"),
    ("yourName", "Jina Lako"),
    ("yourNamePlaceholder", "Andika jina lako"),
    ("specialInstructionsPlaceholder", "mfano, bila vitunguu"),
    ("specialInstructions", "Maelekezo maalum"),
    ("placeOrder", "Agiza"),
    ("placingOrder", "Inatuma agizo..."),
    ("orderPlaced", "Agizo limetumwa!"),
    ("customerNameRequired", "Tafadhali andika jina lako ili kuagiza"),
    ("itemAddedToCart", "Kimeongezwa kikapuni!"),
    ("noTableSelected", "Hakuna meza iliyochaguliwa. Tafadhali skani msimbo wa QR ulio mezani."),
    ("loadingMenu", "Inapakia menyu..."),
    ("noMenuItems", "Hakuna vyakula kwa sasa."),
    ("menuLoadFailed", "Imeshindikana kupakia menyu ya meza hii."),
    ("retry", "Jaribu tena"),
    ("trackOrder", "Fuatilia Agizo Lako"),
    ("noOrderNumber", "Hakuna nambari ya agizo."),
    ("orderNotFound", "Agizo halikupatikana."),
    ("loadingOrder", "Inapakia agizo lako..."),
    ("orderCancelled", "Agizo hili limeghairiwa."),
    ("orderReady", "Agizo lako liko tayari!"),
    ("orderCompleted", "Furahia chakula chako!"),
    ("autoRefresh", "Ukurasa huu unajisasisha wenyewe."),
    ("leaveFeedback", "Toa Maoni"),
    ("backToMenu", "Rudi kwenye Menyu"),
    ("rateYourExperience", "Huduma yetu ilikuwaje?"),
    ("tapToRate", "Gusa nyota kukadiria"),
    ("commentsPlaceholder", "Tuambie zaidi (hiari)"),
    ("submitFeedback", "Tuma Maoni"),
    ("submitting", "Inatuma..."),
    ("thankYou", "Asante kwa maoni yako!"),
    ("redirecting", "Inakurudisha..."),
    ("ratingRequired", "Tafadhali chagua ukadiriaji"),
];

// ========================
// French
// ========================

static FR: &[(&str, &str)] = &[
    ("dashboard", "Tableau de Bord"),
    ("manageMenu", "Gérer le Menu"),
    ("todaysMenu", "Menu du Jour"),
    ("orders", "Commandes"),
    ("customerFeedback", "Avis Clients"),
    ("reports", "Rapports"),
    ("qrCodes", "Codes QR"),
    ("settings", "Paramètres"),
    ("logout", "Déconnexion"),
    ("language", "Langue"),
    ("welcome", "Bienvenue"),
    ("id", "ID"),
    ("name", "Nom"),
    ("description", "Description"),
    ("price", "Prix"),
    ("category", "Catégorie"),
    ("stock", "Stock"),
    ("status", "Statut"),
    ("actions", "Actions"),
    ("date", "Date"),
    ("cancel", "Annuler"),
    ("save", "Enregistrer"),
    ("edit", "Modifier"),
    ("copy", "Copier"),
    ("delete", "Supprimer"),
    ("confirm", "Confirmer"),
    ("close", "Fermer"),
    ("available", "Disponible"),
    ("notAvailable", "Non Disponible"),
    ("previous", "Précédent"),
    ("next", "Suivant"),
    ("search", "Rechercher"),
    ("all", "Tous"),
    ("loadingGeneric", "Chargement..."),
    ("errorGeneric", "Une erreur est survenue. Veuillez réessayer."),
    ("notFound", "Page introuvable"),
    ("login", "Connexion"),
    ("username", "Nom d'utilisateur"),
    ("password", "Mot de passe"),
    ("signIn", "Se connecter"),
    ("register", "S'inscrire"),
    ("email", "E-mail"),
    ("menuItems", "Articles du Menu"),
    ("menuSubtitle", "Gérez les articles de menu de votre restaurant"),
    ("addMenuItem", "Ajouter un Article"),
    ("editMenuItem", "Modifier l'Article"),
    ("nameLabel", "Nom"),
    ("descriptionLabel", "Description"),
    ("priceLabel", "Prix (TSH)"),
    ("categoryLabel", "Catégorie"),
    ("stockLabel", "Quantité en Stock"),
    ("photoLabel", "Photo"),
    ("availableLabel", "Disponible pour commander"),
    ("mainDishes", "Plats Principaux"),
    ("sides", "Accompagnements"),
    ("drinks", "Boissons"),
    ("desserts", "Desserts"),
    ("selectCategory", "Sélectionner une catégorie"),
    ("addItem", "Ajouter"),
    ("updateItem", "Mettre à jour"),
    ("loading", "Chargement des articles..."),
    ("noData", "Aucun article trouvé. Cliquez sur \"Ajouter un Article\"."),
    ("itemAdded", "Article ajouté avec succès!"),
    ("itemUpdated", "Article mis à jour avec succès!"),
    ("itemDeleted", "Article supprimé avec succès!"),
    ("deleteConfirm", "Êtes-vous sûr de vouloir supprimer cet article?"),
    ("nameRequired", "Le nom est requis"),
    ("priceRequired", "Le prix doit être supérieur à 0"),
    ("categoryRequired", "La catégorie est requise"),
    ("fileTooLarge", "La taille du fichier doit être inférieure à 2 Mo"),
    ("invalidFileType", "Veuillez télécharger une image (JPEG, PNG)"),
    ("namePlaceholder", "ex., Ugali & Poisson"),
    ("descriptionPlaceholder", "Décrivez votre plat..."),
    ("pricePlaceholder", "ex., 15000"),
    ("stockPlaceholder", "ex., 50"),
    ("fileHint", "Max 2 Mo, JPEG ou PNG uniquement"),
    ("dailyMenu", "Menu Quotidien"),
    ("dailyMenuSubtitle", "Gérez les articles disponibles pour des dates spécifiques"),
    ("selectDate", "Sélectionner la Date"),
    ("viewMenu", "Voir le Menu"),
    ("addToDailyMenu", "Ajouter au Menu Quotidien"),
    ("menuItem", "Article du Menu"),
    ("selectItem", "Sélectionner un article"),
    ("specialPrice", "Prix Spécial (TSH)"),
    ("specialPriceOptional", "Prix Spécial (facultatif)"),
    ("originalPrice", "Prix Original"),
    ("photo", "Photo"),
    ("noDailyMenuItems", "Aucun article dans le menu quotidien pour cette date."),
    ("itemAddedToDailyMenu", "Article ajouté au menu quotidien avec succès!"),
    ("itemUpdatedInDailyMenu", "Article du menu quotidien mis à jour avec succès!"),
    ("itemRemovedFromDailyMenu", "Article retiré du menu quotidien avec succès!"),
    ("removeDailyMenuConfirm", "Êtes-vous sûr de vouloir retirer cet article du menu quotidien?"),
    ("table", "Table"),
    ("customer", "Client"),
    ("items", "Articles"),
    ("total", "Total"),
    ("statusPending", "En attente"),
    ("statusConfirmed", "Confirmée"),
    ("statusPreparing", "En préparation"),
    ("statusReady", "Prête"),
    ("statusCompleted", "Terminée"),
    ("statusCancelled", "Annulée"),
    ("paymentPending", "Non payée"),
    ("paymentCompleted", "Payée"),
    ("rating", "Note"),
    ("comments", "Commentaires"),
    ("totalRevenue", "Revenu Total"),
    ("totalOrders", "Total des Commandes"),
    ("topSellingItems", "Articles les Plus Vendus"),
    ("tableTypeTable", "Table"),
    ("tableTypeRoom", "Chambre"),
    ("customerWelcome", "Bienvenue! Parcourez notre menu et commandez depuis votre table."),
    ("customerWelcomeBack", "Bon retour parmi nous!"),
    ("menuTitle", "Notre Menu"),
    ("allItems", "Tout"),
    ("addToCart", "Ajouter au Panier"),
    ("cart", "Votre Commande"),
    ("viewCart", "Voir le Panier"),
    ("cartEmpty", "Votre panier est vide"),
    ("remove", "Retirer"),
    ("yourName", "Votre Nom"),
    ("yourNamePlaceholder", "Entrez votre nom"),
    ("specialInstructionsPlaceholder", "ex., sans oignons"),
    ("specialInstructions", "Instructions spéciales"),
    ("placeOrder", "Commander"),
    ("placingOrder", "Envoi de la commande..."),
    ("orderPlaced", "Commande passée avec succès!"),
    ("customerNameRequired", "Veuillez entrer votre nom pour commander"),
    ("itemAddedToCart", "Ajouté au panier!"),
    ("noTableSelected", "Aucune table sélectionnée. Veuillez scanner le code QR de votre table."),
    ("loadingMenu", "Chargement du menu..."),
    ("noMenuItems", "Aucun article disponible pour le moment."),
    ("menuLoadFailed", "Impossible de charger le menu de cette table."),
    ("retry", "Réessayer"),
    ("trackOrder", "Suivre Votre Commande"),
    ("noOrderNumber", "Aucun numéro de commande fourni."),
    ("orderNotFound", "Commande introuvable."),
    ("loadingOrder", "Chargement de votre commande..."),
    ("orderCancelled", "Cette commande a été annulée."),
    ("orderReady", "Votre commande est prête!"),
    ("orderCompleted", "Bon appétit!"),
    ("autoRefresh", "Cette page se met à jour automatiquement."),
    ("leaveFeedback", "Laisser un Avis"),
    ("backToMenu", "Retour au Menu"),
    ("rateYourExperience", "Comment était votre expérience?"),
    ("tapToRate", "Touchez une étoile pour noter"),
    ("commentsPlaceholder", "Dites-nous en plus (facultatif)"),
    ("submitFeedback", "Envoyer l'Avis"),
    ("submitting", "Envoi..."),
    ("thankYou", "Merci pour votre avis!"),
    ("redirecting", "Redirection..."),
    ("ratingRequired", "Veuillez choisir une note"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_translate_uses_selected_language() {
        assert_eq!(translate(Language::En, "menuItems"), "Menu Items");
        assert_eq!(translate(Language::Sw, "menuItems"), "Vyakula");
        assert_eq!(translate(Language::Fr, "menuItems"), "Articles du Menu");
    }

    #[test]
    fn test_translate_falls_back_to_english_then_key() {
        assert_eq!(translate(Language::Sw, "apiBaseUrl"), "Backend URL");
        assert_eq!(translate(Language::Fr, "noSuchKey"), "noSuchKey");
    }

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::from_code("sw"), Some(Language::Sw));
        assert_eq!(Language::from_code(" fr "), Some(Language::Fr));
        assert_eq!(Language::from_code("de"), None);
        assert_eq!(Language::default().code(), "en");
        assert_eq!(serde_json::to_string(&Language::Sw).unwrap(), "\"sw\"");
    }

    #[test]
    fn test_dictionaries_have_no_duplicates_or_orphans() {
        let en: HashSet<&str> = keys().collect();
        assert_eq!(en.len(), EN.len(), "duplicate key in English dictionary");
        for (name, table) in [("sw", SW), ("fr", FR)] {
            let own: HashSet<&str> = table.iter().map(|(k, _)| *k).collect();
            assert_eq!(own.len(), table.len(), "duplicate key in {}", name);
            for key in own {
                assert!(en.contains(key), "{} key {} missing from English", name, key);
            }
        }
    }

    #[test]
    fn test_label_keys_are_translated() {
        use crate::domain::{Category, OrderStatus};
        use crate::validation::ValidationError;

        let en: HashSet<&str> = keys().collect();
        for status in OrderStatus::ALL {
            assert!(en.contains(status.label_key()));
        }
        for category in Category::ALL {
            assert!(en.contains(category.label_key()));
        }
        for err in [
            ValidationError::NameRequired,
            ValidationError::PriceNotPositive,
            ValidationError::EmptyCart,
            ValidationError::PercentOutOfRange,
            ValidationError::TableNumberTooLong,
        ] {
            assert!(en.contains(err.key()), "{}", err.key());
        }
    }
}
