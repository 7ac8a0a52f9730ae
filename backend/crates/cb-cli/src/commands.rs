use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an account and sign in
    Signup {
        #[arg(long)]
        email: String,

        /// Display name (defaults to the email)
        #[arg(long)]
        name: Option<String>,

        /// Prompted for when omitted
        #[arg(long)]
        password: Option<String>,
    },

    /// Sign in to an existing account
    Signin {
        #[arg(long)]
        email: String,

        /// Prompted for when omitted
        #[arg(long)]
        password: Option<String>,
    },

    /// Forget the stored session
    Signout {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Show the signed-in account
    Whoami,

    /// List recipes, optionally filtered by title or ingredient
    List {
        #[arg(long)]
        search: Option<String>,

        /// Newest first instead of store order
        #[arg(long)]
        newest: bool,
    },

    /// Show one recipe
    Show { id: String },

    /// Add a recipe
    Add {
        #[arg(long)]
        title: String,

        /// Repeat for each ingredient
        #[arg(long = "ingredient")]
        ingredients: Vec<String>,

        #[arg(long, default_value = "")]
        steps: String,

        /// Image URI or data URI
        #[arg(long)]
        image: Option<String>,
    },

    /// Edit one of your recipes; omitted fields keep their current value
    Edit {
        id: String,

        #[arg(long)]
        title: Option<String>,

        /// Replaces all ingredients; repeat for each one
        #[arg(long = "ingredient")]
        ingredients: Vec<String>,

        #[arg(long)]
        steps: Option<String>,

        #[arg(long, conflicts_with = "clear_image")]
        image: Option<String>,

        /// Remove the image
        #[arg(long)]
        clear_image: bool,
    },

    /// Delete one of your recipes
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}
