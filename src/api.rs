//! Endpoint registry.
//!
//! Every known API path is a variant of a per-area enum. The areas are
//! gathered in [`Endpoint`], and each variant resolves to exactly one URI
//! template through [`Endpoint::template`]. Templates contain placeholders
//! such as `<ID>` that [`substitute`](crate::protocol::substitute) fills
//! from parameters of the same (lower-case) name.
//!
//! | Area | Prefix |
//! |------|--------|
//! | [`V1`] | `/api/v1/`, plus `/api/proofs` and `/api/oembed` |
//! | [`V2`] | `/api/v2/` |
//! | [`OAuth`] | `/oauth/` |
//! | [`PleromaV1`] | `/api/v1/pleroma/` |
//! | [`PleromaAdmin`] | `/api/pleroma/` |
//!
//! # Examples
//!
//! ```
//! use masto_http::api::{Endpoint, V1};
//!
//! assert_eq!(V1::AccountsIdFollow.template(), "/api/v1/accounts/<ID>/follow");
//! assert_eq!(Endpoint::from(V1::Instance).template(), "/api/v1/instance");
//! ```

macro_rules! endpoints {
    ($(
        $(#[$meta:meta])*
        $area:ident {
            $($variant:ident => $template:literal,)+
        }
    )+) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
            #[allow(missing_docs)]
            pub enum $area {
                $($variant,)+
            }

            impl $area {
                /// Every endpoint of this area, in declaration order.
                pub const ALL: &'static [$area] = &[$($area::$variant,)+];

                /// URI template, relative to the instance base URI.
                pub const fn template(self) -> &'static str {
                    match self {
                        $($area::$variant => $template,)+
                    }
                }
            }

            impl From<$area> for Endpoint {
                fn from(endpoint: $area) -> Self {
                    Endpoint::$area(endpoint)
                }
            }
        )+

        /// Any known endpoint.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Endpoint {
            $(
                #[allow(missing_docs)]
                $area($area),
            )+
        }

        impl Endpoint {
            /// URI template, relative to the instance base URI.
            pub const fn template(self) -> &'static str {
                match self {
                    $(Endpoint::$area(endpoint) => endpoint.template(),)+
                }
            }

            /// Every endpoint of every area.
            pub fn all() -> Vec<Endpoint> {
                let mut all = Vec::new();
                $(all.extend($area::ALL.iter().copied().map(Endpoint::$area));)+
                all
            }
        }
    };
}

endpoints! {
    /// Mastodon API, version 1.
    V1 {
        Apps => "/api/v1/apps",
        AppsVerifyCredentials => "/api/v1/apps/verify_credentials",

        Accounts => "/api/v1/accounts",
        AccountsVerifyCredentials => "/api/v1/accounts/verify_credentials",
        AccountsUpdateCredentials => "/api/v1/accounts/update_credentials",
        AccountsId => "/api/v1/accounts/<ID>",
        AccountsIdStatuses => "/api/v1/accounts/<ID>/statuses",
        AccountsIdFollowers => "/api/v1/accounts/<ID>/followers",
        AccountsIdFollowing => "/api/v1/accounts/<ID>/following",
        AccountsIdFeaturedTags => "/api/v1/accounts/<ID>/featured_tags",
        AccountsIdLists => "/api/v1/accounts/<ID>/lists",
        AccountsIdIdentityProofs => "/api/v1/accounts/<ID>/identity_proofs",
        AccountsIdFollow => "/api/v1/accounts/<ID>/follow",
        AccountsIdUnfollow => "/api/v1/accounts/<ID>/unfollow",
        AccountsIdRemoveFromFollowers => "/api/v1/accounts/<ID>/remove_from_followers",
        AccountsIdBlock => "/api/v1/accounts/<ID>/block",
        AccountsIdUnblock => "/api/v1/accounts/<ID>/unblock",
        AccountsIdMute => "/api/v1/accounts/<ID>/mute",
        AccountsIdUnmute => "/api/v1/accounts/<ID>/unmute",
        AccountsIdPin => "/api/v1/accounts/<ID>/pin",
        AccountsIdUnpin => "/api/v1/accounts/<ID>/unpin",
        AccountsIdNote => "/api/v1/accounts/<ID>/note",
        AccountsRelationships => "/api/v1/accounts/relationships",
        AccountsFamiliarFollowers => "/api/v1/accounts/familiar_followers",
        AccountsSearch => "/api/v1/accounts/search",
        AccountsLookup => "/api/v1/accounts/lookup",

        Bookmarks => "/api/v1/bookmarks",
        Favourites => "/api/v1/favourites",
        Mutes => "/api/v1/mutes",
        Blocks => "/api/v1/blocks",
        DomainBlocks => "/api/v1/domain_blocks",
        Filters => "/api/v1/filters",
        FiltersId => "/api/v1/filters/<ID>",
        Reports => "/api/v1/reports",
        FollowRequests => "/api/v1/follow_requests",
        FollowRequestsIdAuthorize => "/api/v1/follow_requests/<ID>/authorize",
        FollowRequestsIdReject => "/api/v1/follow_requests/<ID>/reject",
        Endorsements => "/api/v1/endorsements",
        FeaturedTags => "/api/v1/featured_tags",
        FeaturedTagsId => "/api/v1/featured_tags/<ID>",
        FeaturedTagsSuggestions => "/api/v1/featured_tags/suggestions",
        Preferences => "/api/v1/preferences",
        Suggestions => "/api/v1/suggestions",
        SuggestionsAccountId => "/api/v1/suggestions/<ACCOUNT_ID>",

        Statuses => "/api/v1/statuses",
        StatusesId => "/api/v1/statuses/<ID>",
        StatusesIdContext => "/api/v1/statuses/<ID>/context",
        StatusesIdRebloggedBy => "/api/v1/statuses/<ID>/reblogged_by",
        StatusesIdFavouritedBy => "/api/v1/statuses/<ID>/favourited_by",
        StatusesIdFavourite => "/api/v1/statuses/<ID>/favourite",
        StatusesIdUnfavourite => "/api/v1/statuses/<ID>/unfavourite",
        StatusesIdReblog => "/api/v1/statuses/<ID>/reblog",
        StatusesIdUnreblog => "/api/v1/statuses/<ID>/unreblog",
        StatusesIdBookmark => "/api/v1/statuses/<ID>/bookmark",
        StatusesIdUnbookmark => "/api/v1/statuses/<ID>/unbookmark",
        StatusesIdMute => "/api/v1/statuses/<ID>/mute",
        StatusesIdUnmute => "/api/v1/statuses/<ID>/unmute",
        StatusesIdPin => "/api/v1/statuses/<ID>/pin",
        StatusesIdUnpin => "/api/v1/statuses/<ID>/unpin",
        StatusesIdHistory => "/api/v1/statuses/<ID>/history",
        StatusesIdSource => "/api/v1/statuses/<ID>/source",
        Media => "/api/v1/media",
        MediaId => "/api/v1/media/<ID>",
        PollsId => "/api/v1/polls/<ID>",
        PollsIdVotes => "/api/v1/polls/<ID>/votes",
        ScheduledStatuses => "/api/v1/scheduled_statuses",
        ScheduledStatusesId => "/api/v1/scheduled_statuses/<ID>",

        TimelinesPublic => "/api/v1/timelines/public",
        TimelinesTagHashtag => "/api/v1/timelines/tag/<HASHTAG>",
        TimelinesHome => "/api/v1/timelines/home",
        TimelinesListListId => "/api/v1/timelines/list/<LIST_ID>",
        Conversations => "/api/v1/conversations",
        ConversationsId => "/api/v1/conversations/<ID>",
        ConversationsIdRead => "/api/v1/conversations/<ID>/read",
        Lists => "/api/v1/lists",
        ListsId => "/api/v1/lists/<ID>",
        ListsIdAccounts => "/api/v1/lists/<ID>/accounts",
        Markers => "/api/v1/markers",

        StreamingHealth => "/api/v1/streaming/health",
        StreamingUser => "/api/v1/streaming/user",
        StreamingUserNotification => "/api/v1/streaming/user/notification",
        StreamingPublic => "/api/v1/streaming/public",
        StreamingPublicLocal => "/api/v1/streaming/public/local",
        StreamingPublicRemote => "/api/v1/streaming/public/remote",
        StreamingHashtag => "/api/v1/streaming/hashtag",
        StreamingHashtagLocal => "/api/v1/streaming/hashtag/local",
        StreamingList => "/api/v1/streaming/list",
        StreamingDirect => "/api/v1/streaming/direct",

        Notifications => "/api/v1/notifications",
        NotificationsId => "/api/v1/notifications/<ID>",
        NotificationsClear => "/api/v1/notifications/clear",
        NotificationsIdDismiss => "/api/v1/notifications/<ID>/dismiss",
        PushSubscription => "/api/v1/push/subscription",

        Instance => "/api/v1/instance",
        InstancePeers => "/api/v1/instance/peers",
        InstanceActivity => "/api/v1/instance/activity",
        InstanceRules => "/api/v1/instance/rules",
        InstanceDomainBlocks => "/api/v1/instance/domain_blocks",
        Trends => "/api/v1/trends",
        TrendsTags => "/api/v1/trends/tags",
        TrendsStatuses => "/api/v1/trends/statuses",
        TrendsLinks => "/api/v1/trends/links",
        Directory => "/api/v1/directory",
        CustomEmojis => "/api/v1/custom_emojis",
        Announcements => "/api/v1/announcements",
        AnnouncementsIdDismiss => "/api/v1/announcements/<ID>/dismiss",
        AnnouncementsIdReactionsName => "/api/v1/announcements/<ID>/reactions/<NAME>",

        AdminAccounts => "/api/v1/admin/accounts",
        AdminAccountsId => "/api/v1/admin/accounts/<ID>",
        AdminAccountsIdAction => "/api/v1/admin/accounts/<ID>/action",
        AdminAccountsIdApprove => "/api/v1/admin/accounts/<ID>/approve",
        AdminAccountsIdReject => "/api/v1/admin/accounts/<ID>/reject",
        AdminAccountsIdEnable => "/api/v1/admin/accounts/<ID>/enable",
        AdminAccountsIdUnsilence => "/api/v1/admin/accounts/<ID>/unsilence",
        AdminAccountsIdUnsuspend => "/api/v1/admin/accounts/<ID>/unsuspend",
        AdminAccountsIdUnsensitive => "/api/v1/admin/accounts/<ID>/unsensitive",
        AdminReports => "/api/v1/admin/reports",
        AdminReportsId => "/api/v1/admin/reports/<ID>",
        AdminReportsIdAssignToSelf => "/api/v1/admin/reports/<ID>/assign_to_self",
        AdminReportsIdUnassign => "/api/v1/admin/reports/<ID>/unassign",
        AdminReportsIdResolve => "/api/v1/admin/reports/<ID>/resolve",
        AdminReportsIdReopen => "/api/v1/admin/reports/<ID>/reopen",

        Proofs => "/api/proofs",
        OEmbed => "/api/oembed",
    }

    /// Mastodon API, version 2.
    V2 {
        Search => "/api/v2/search",
        Media => "/api/v2/media",
        Instance => "/api/v2/instance",
        Suggestions => "/api/v2/suggestions",
        Filters => "/api/v2/filters",
        FiltersId => "/api/v2/filters/<ID>",
        FiltersIdKeywords => "/api/v2/filters/<ID>/keywords",
        FiltersKeywordsId => "/api/v2/filters/keywords/<ID>",
        FiltersIdStatuses => "/api/v2/filters/<ID>/statuses",
        FiltersStatusesId => "/api/v2/filters/statuses/<ID>",
    }

    /// OAuth 2.0 endpoints.
    OAuth {
        Authorize => "/oauth/authorize",
        Token => "/oauth/token",
        Revoke => "/oauth/revoke",
    }

    /// Pleroma extensions under the Mastodon API prefix.
    PleromaV1 {
        AccountsConfirmationResend => "/api/v1/pleroma/accounts/confirmation_resend",
        AccountsIdSubscribe => "/api/v1/pleroma/accounts/<ID>/subscribe",
        AccountsIdUnsubscribe => "/api/v1/pleroma/accounts/<ID>/unsubscribe",
        AccountsIdFavourites => "/api/v1/pleroma/accounts/<ID>/favourites",
        AccountsIdEndorsements => "/api/v1/pleroma/accounts/<ID>/endorsements",
        AccountsIdScrobbles => "/api/v1/pleroma/accounts/<ID>/scrobbles",
        Mascot => "/api/v1/pleroma/mascot",
        ConversationsId => "/api/v1/pleroma/conversations/<ID>",
        ConversationsIdStatuses => "/api/v1/pleroma/conversations/<ID>/statuses",
        ConversationsRead => "/api/v1/pleroma/conversations/read",
        NotificationsRead => "/api/v1/pleroma/notifications/read",
        StatusesIdReactions => "/api/v1/pleroma/statuses/<ID>/reactions",
        StatusesIdReactionsEmoji => "/api/v1/pleroma/statuses/<ID>/reactions/<EMOJI>",
        Scrobble => "/api/v1/pleroma/scrobble",
        Backups => "/api/v1/pleroma/backups",
    }

    /// Pleroma administration and emoji pack API.
    PleromaAdmin {
        Users => "/api/pleroma/admin/users",
        UsersFollow => "/api/pleroma/admin/users/follow",
        UsersUnfollow => "/api/pleroma/admin/users/unfollow",
        UsersTag => "/api/pleroma/admin/users/tag",
        UsersActivate => "/api/pleroma/admin/users/activate",
        UsersDeactivate => "/api/pleroma/admin/users/deactivate",
        UsersApprove => "/api/pleroma/admin/users/approve",
        UsersPermissionGroup => "/api/pleroma/admin/users/permission_group/<PERMISSION_GROUP>",
        UsersNicknameOrId => "/api/pleroma/admin/users/<NICKNAME_OR_ID>",
        UsersNicknameOrIdStatuses => "/api/pleroma/admin/users/<NICKNAME_OR_ID>/statuses",
        UsersNicknamePermissionGroup => "/api/pleroma/admin/users/<NICKNAME>/permission_group",
        UsersNicknamePermissionGroupPermissionGroup =>
            "/api/pleroma/admin/users/<NICKNAME>/permission_group/<PERMISSION_GROUP>",
        UsersNicknameCredentials => "/api/pleroma/admin/users/<NICKNAME>/credentials",
        Instances => "/api/pleroma/admin/instances",
        InstancesInstanceStatuses => "/api/pleroma/admin/instances/<INSTANCE>/statuses",
        Reports => "/api/pleroma/admin/reports",
        ReportsId => "/api/pleroma/admin/reports/<ID>",
        ReportsIdNotes => "/api/pleroma/admin/reports/<ID>/notes",
        ReportsReportIdNotesId => "/api/pleroma/admin/reports/<REPORT_ID>/notes/<ID>",
        Statuses => "/api/pleroma/admin/statuses",
        StatusesId => "/api/pleroma/admin/statuses/<ID>",
        Config => "/api/pleroma/admin/config",
        ConfigDescriptions => "/api/pleroma/admin/config/descriptions",
        Relay => "/api/pleroma/admin/relay",
        ModerationLog => "/api/pleroma/admin/moderation_log",
        Stats => "/api/pleroma/admin/stats",
        EmojiPacks => "/api/pleroma/emoji/packs",
        EmojiPacksName => "/api/pleroma/emoji/packs/<NAME>",
        EmojiPacksNameFiles => "/api/pleroma/emoji/packs/<NAME>/files",
        EmojiPacksImport => "/api/pleroma/emoji/packs/import",
        EmojiPacksRemote => "/api/pleroma/emoji/packs/remote",
    }
}
