//! Embedded Unicode tables, generated offline from Unicode 14.0.0 data.
//!
//! Category sets are stored as a delta directory plus an index string;
//! consecutive character pairs in the string select directory entries that
//! advance a running code unit to the next range start and range end.
//! `char_range::from_category_data` expands them to boundary arrays.

/// `(name, delta directory, index string)` for every named category set.
pub static CATEGORIES: &[(&str, &[u16], &str)] = &[
    ("L", &[2, 0, 3, 4, 1, 6, 5, 7, 8, 17, 11, 15, 25, 22, 12, 9, 10, 42, 21, 30, 16, 18, 13, 37, 14, 19, 40, 46, 29, 32, 24, 23, 53, 65, 88, 59, 31, 27, 35, 43, 55, 49, 63, 48, 26, 36, 41, 33, 28, 85, 51, 68, 69, 50, 52, 117, 102, 457, 130, 82, 138, 165, 72, 98, 20, 47, 64, 116, 332, 56, 66, 38, 619, 74, 83, 94, 191, 277, 2684, 228, 81, 470, 89, 93, 513, 6591, 22156, 45, 268, 114, 11171, 8453, 365, 105, 39, 107, 34, 362, 134], "A,',K!*!&!%- 3 Y&*+#(! !Z# $\"\" !'!   ! 9 [ \\/] 7\"!':^L&\";1M$ _ !4$($* \"!)! <3B.!,=0$&!%2&!0!#!>>(0%? &5NC@#!9!(/4+&'\"$\"2 % !#\"#!)!8$  +$*!/&&$\"2 % $ $ $=\" !` )(   2 % $ ##!9!4$>!.'\"$\"2 % $ ##!D$  4!5! &#  \"#$ ! $#$# #*?!@'   - +#!E \"!\"$D!&'   - / ##!=$ $4$5(   :\"!)!% / ,&%)#? ( !\"%Ca $6%C$ ! # ? ! / $0!\"# !-\"O!b' FP#c12!)&&\"#!#$( &.6!57 !%!\"1 d \"\"% ! \"\": \"\"= \"\"% ! \"\"8 e \"\"fg+)Q\"&#h\"4 ,%i''()85+)+.  4RM!&!SB(#\"O !%T*3U<\"#.G&,H-0Vj!k;5'H<8$*GEF1 *F\"((1\" 1\" & $#!%lAm\"&\"7\"&\"' ! ! ! 3\"V % !#  %#\"\"&&.%  %W!8!).X!&!\"/ !##'! ! ! \" 0\"\"%#&!@$no'\"#$67 !%!\"H(!)-0% % % % % % % %p!q$G#%$&Q'  r \"%1 s5DI+tuAvSw\"x#+*$2;)3\"TU(\"X\"J%$ ! #,+   \" -3R+IJ&#! $.E*-LP(;<!)# /*# :>  '2-#!#I !#$\"#\"! !, \"0( 6&\"&\"&0% % 1 6'y3z6-&K{|\"}~%6#%! / . # ! $ $ \u{7f}\u{80}\u{81}9J\"@N*W# \u{82}7,',.B#&\"&\"&\" "),
    ("Lu", &[0, 2, 3, 1, 4, 9, 7, 6, 5, 8, 10, 11, 13, 25, 49, 37, 12, 65, 102, 22, 34, 290, 16, 36, 50, 2890, 723, 85, 2203, 42, 321, 73, 263, 62, 2685, 47, 31054, 20, 136, 29, 22316], "1-23!'4 ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! \" ! ! ! ! ! ! ! \" ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! !#! ! $#! !#!!\"\"!#!!$#!#! ! !#! \" !#!!! !#$ ) \" \" \" ! ! ! ! ! ! ! \" ! ! ! ! ! ! ! ! \" \" !!! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! )#!#\" !\"! ! ! ! 5 ! $ % & !!! !#!6!)7 \"!$ ! ! ! ! ! ! ! ! ! ! ! ' \" !#\"8. ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! * ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! !#! ! ! ! ! ! \" ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! \"/9/! ' :;<=\"!> ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! * ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! *&%(+&%&%(0 ! ! ! %&?\",\",\",$0\"@ ( $!\"!\" $$& ! ! !\"\"\"+#' A BC. !!\" ! ! !\"! \" %!! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! % ! ( D ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! E ! ! ! ! ! ! ! ! ! ! ! ! ! F ! ! ! ! ! ! $ ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! + ! !#! ! ! ! ( ! \" ! $ ! ! ! ! ! ! ! ! ! !$!$! ! ! ! ! ! ! !\"! & ' ! G H-"),
    ("Ll", &[0, 2, 3, 1, 4, 7, 5, 9, 6, 8, 42, 11, 13, 25, 28, 47, 97, 59, 23, 68, 26, 194, 19, 34, 52, 10, 49, 40, 2888, 761, 2179, 120, 43, 64, 12, 33, 103, 275, 54, 2732, 37, 30996, 20, 136, 29, 822, 79, 20289, 1066], "0-1 *2!%! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! !#! ! ! ! ! ! ! !#! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! \" ! !!\" ! \" $#& \" $!\" \" ! ! \" !#! \" $ ! \"#\"!% \" \" ! ! ! ! ! ! ! !#! ! ! ! ! ! ! ! !#\" ! $ ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! !(\" \"#! & ! ! ! !3!45 ! $ $!6 .7!#$!! ! ! ! ! ! ! ! ! ! ! !$! \" \"#8/! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! 9 ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! \" ! ! ! ! ! !#! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! :;<*\"!=&>)?@AB!CD ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! !)! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! !)'&+%'%'&+%'%',\"%'%'%'$!#% $!!#'\"\"#'%+!!#E $#$ . & & \"#'\"& F G/! $#! ! ! & !#!&( ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! !#) ! & ,H! ( I ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! J ! ! ! ! ! ! ! ! ! ! ! ! ! K ! ! ! ! ! !!! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! !%! ! \" ! ! ! ! & ! \" !!! ! ! ! ! ! ! ! ! ! ( ( ! ! ! ! ! ! ! & ! % ! ! ! ! L $ M*())NO(,$P-"),
    ("Lt", &[0, 7, 3, 9, 453, 39, 7574, 13, 16, 48], "$ \" \" % &!#!#!' ( ) "),
    ("Lm", &[0, 1, 5, 4, 2, 17, 8, 6, 10, 14, 470, 688, 11, 15, 134, 479, 231, 165, 270, 32, 161, 168, 1237, 128, 566, 1755, 108, 612, 465, 175, 62, 35, 36, 690, 12, 3040, 242, 192, 44, 98, 94, 28439, 1251, 271, 115, 29, 122, 81, 24, 106, 23, 138, 109, 22, 104, 3, 21511, 46], "+%\",-#& $ . ' / 0 1!2!\" 3 ( # 4 5 6 7 8 9 : ; <\"=>) ?@A ) %BC!D E * F#' G!H$I J\"K L M!N&O P Q$#!* R S T U!VW( X Y!"),
    ("Lo", &[2, 0, 3, 4, 1, 5, 6, 8, 9, 11, 15, 17, 7, 22, 25, 12, 21, 16, 10, 18, 30, 14, 46, 31, 29, 32, 24, 23, 40, 43, 53, 19, 27, 13, 42, 114, 68, 34, 55, 49, 170, 26, 60, 33, 35, 28, 51, 41, 52, 69, 50, 63, 257, 209, 828, 36, 98, 88, 20, 59, 47, 64, 116, 328, 56, 66, 38, 619, 74, 177, 1083, 3064, 552, 54, 85, 89, 93, 513, 6591, 65, 21012, 1142, 39, 267, 67, 104, 146, 11171, 48, 8453, 365, 105, 107, 362, 117, 134, 106, 44], "H!1!T!%\"U!VI%\"67 (W$ X !.$) \"!+! 84Y/!.9-0=:'2&; %3<J>#!?!'(+5%,\"$\"0 & !#\"#!+!5$  *$)!(%%$\"0 & $ $ $9\" !Z +'   0 & $ ##!?!1$:!/,\"$\"0 & $ ##!7$  1!3! %#  \"#$ ! $#$# #);!>,   - *#!@ \"!\"$7!%,   - ( ##!9$ $1$3'   <\"!+!& ( .%&+#; ' !\"&[\\ $A%J$ ! # ; ! ( $2!\"#:\"K!], LM#^B0!+%%\"#!#$' %/A!C_ \"\"& ! \"\"< \"\"9 \"\"& ! \"\"5 ` \"\"ab*Cc\"1 .&d,,'+53*+*/  1NO!DE P'#\"K !&Q)4R8\"#/=%.F-2Pe63,F85$)=@LB )8C\" % $#!f\"gF.-2& & & & & & & &h!i!%j(! k%!&B l37G*mnop qDr(s%*)$t!RQH!u!#&   \" -4N*GS%#! $/@)-IM'66#\"')# <:  ,0* %#!#G !#$\"#\"! !.$#2'!*%\"%\"%2& &vE4wA-%xyz\"{D! ( / # ! $ $ |E}?S\">O)~# \u{7f}\u{80}( \u{81}\"4#%\"%\"%\" "),
    ("M", &[2, 0, 1, 3, 6, 5, 4, 10, 11, 31, 8, 7, 57, 12, 13, 17, 30, 19, 49, 9, 44, 20, 26, 23, 32, 27, 56, 29, 28, 50, 35, 24, 14, 46, 48, 39, 51, 15, 768, 111, 276, 264, 73, 102, 36, 92, 59, 25, 61, 43, 55, 21, 60, 41, 71, 62, 99, 75, 101, 704, 947, 65, 118, 119, 220, 58, 16, 153, 199, 63, 721, 3071, 142, 97, 555, 106, 30165, 33, 81, 273, 84, 45, 37, 68, 42, 237, 20273, 738], "FGH$I4 ! \" \" !J'25/!K$#%#\" #L!)6M'N*'!O# *   &4 P+Q7 8R  / $(\"0 ,! $#\"# '!(\"9!# ,! &%\"# &!)\"&!- ,! +    S\"7%  ,! $#\"# * (\")!T&&  #'!U&:! $   #*\"-\"0 ,! $   #*\"-\";#:\" $   #'!(\"0 V!%% ! +1\"W!#$.+X!#*-%Y\"<! ! !%\"=1 \"$' >'!Z1?#%   #$&#@( !(#[ \\#; 0\")\"])'!A  !^\">!_(%(`&a3 <#!20=&BbC*. )-,.21c  5%!+!# def8g h!i)j%k\"l# 3m\"n\"o!&!%!?&%!p\"D/9/@!C+6-q#B.r!s..!3\"A D!  #\"$\" !t&$\"u+ \"v!wE/E"),
    ("Mn", &[0, 2, 1, 3, 5, 4, 6, 7, 10, 9, 31, 8, 59, 12, 13, 49, 17, 26, 30, 21, 56, 58, 15, 44, 73, 43, 23, 11, 27, 35, 14, 33, 768, 111, 276, 266, 20, 102, 36, 92, 25, 61, 62, 51, 29, 91, 99, 75, 28, 103, 16, 704, 947, 65, 46, 118, 119, 220, 50, 41, 57, 153, 199, 63, 721, 3071, 142, 97, 555, 108, 30165, 81, 273, 152, 39, 47, 40, 68, 48, 52, 239, 20273, 738], "@AB%C7! !\"!\"! 8(/D0 E&#$#\"!#F *1G(,+( H#!+!!!%7!I'9:!*4 ! $'$ %&;\"2 , $#) 3\"< #\"5 $\"$\"#!% *\"% -\"5 $%!\"$ 3\":$! , # !#) +\"-\"* J . K % 4 !!&!!#+\"-\"2 , # ' &\"3\"L\"5\"$#) 3\"2 8 +!! M #&.'N #+-$O\"P ! ! 4.!%!\"&(!=( Q#!$!\"#\"1\"$!0#> #\"' R S!T!2\"*\"*\"U\"!&) #(( V!! W\"= X!$\"( '!Y\"# , !&! ! #'')# /.!6Z#/ !%! & [+.\"?##\"!!\\ !\"% !!,'#\"]!!-!&$ ' %\"^_`-$ %;a!b c*d#e\"f $)?\"g\"h % $ 1\"& i\"<0> j'1(k!/ ###\"l m$#\"#\". ) n o !!#\"&\"! 9\") p # $ q r606"),
    ("Mc", &[1, 0, 2, 3, 59, 7, 5, 11, 9, 4, 6, 62, 49, 51, 44, 10, 172, 22, 31, 2307, 56, 67, 54, 103, 42, 43, 76, 19, 331, 64, 26, 1657, 130, 8, 347, 225, 146, 61, 4919, 30708, 89, 15, 143, 48, 111, 25, 46, 110, 238], "3!4!#\"(#\" - $\"% # '!.!$\"5!$\"(!\" 6 $!\"!% # '!7 \" )\"\"\"'!8\"+#+ $!\")# \" / . $\"*\"\"\"'!9 :\"%%; < =!0 &!%!# > '\"#*1 #&#!'\"?!2!@!A%\" B##\"& \"&C $!\"!/!\" (&D!,!*!\")\" +!2!& #!E!#\"\"!) ,%( 0!1!F G #!H -IJ K!, & #\"L # M!N!\"!O!# *!P \" \" \"!"),
    ("Me", &[2, 1160, 1, 5685, 0, 1567, 3, 34188], "!\"#$%&  ' "),
    ("N", &[9, 5, 7, 0, 3, 2, 119, 6, 199, 135, 8, 71, 19, 23, 87, 4, 14, 48, 121, 1, 1442, 413, 109, 111, 12, 116, 104, 105, 18, 110, 97, 269, 720, 882, 240, 301, 129, 10, 166, 183, 1047, 50, 727, 59, 79, 21, 631, 29, 1386, 778, 26, 15, 344, 139, 31, 33, 40, 29537, 189, 321, 155, 39, 407, 21271], "1 23'#$%4 ) ( 5 & !!6 & & $!789  ': ;'*<= > & +,? + @,A%B \" - C DEF \" G . ) \" H#/!\" (I$/JKLMNOP#Q#R*S%T$U V\"%0W X0Y Z [!\\ ] ( - . ^ _ "),
    ("Nd", &[9, 119, 135, 199, 71, 39, 7, 87, 48, 1575, 413, 97, 279, 1863, 301, 129, 167, 183, 35271, 679, 23, 407, 21271], "( ) \" # * ! ! ! ! ! ! ! ! ! + ! $ , $ - % . / 0 & 1 ' \" & 2 3 % # 4 ' 5 6 "),
    ("Nl", &[2, 3, 5870, 2672, 34, 3711, 0, 26, 8, 15, 30380, 9], "\" #$!!%&'() *+"),
    ("No", &[0, 9, 5, 6, 2, 3, 7, 14, 178, 1, 2358, 377, 121, 134, 218, 18, 8, 434, 1078, 19, 1140, 481, 1686, 4, 199, 15, 42, 727, 59, 79, 21, 631, 29, 1386, 1173, 139, 31, 33, 40, 30065], "()# %$*\"+\",$-#.#/01!234!5 6 7\"&!89: ;<=>?@A B%C!D&$'E!F'G\""),
    ("P", &[0, 2, 1, 3, 5, 11, 4, 9, 13, 6, 14, 12, 17, 33, 27, 28, 45, 21, 75, 32, 91, 38, 72, 23, 31, 36, 703, 467, 42, 52, 103, 44, 234, 55, 262, 141, 121, 122, 391, 368, 169, 112, 172, 613, 8, 152, 622, 79, 158, 10, 314, 217, 129, 173, 29, 126, 60, 63, 65, 7, 829, 19, 15, 634, 30, 1086, 80, 404, 64, 764, 113, 144, 46, 420, 99, 29699, 270, 100, 116, 381, 87, 41, 50, 48, 98, 125, 127, 250, 20819, 209, 34, 150], "-!!$!#%\"&\".!! / ! 9 ) & %\"& & : ' ;$<\"= ! # # 0\"1\"!\"* !!2#> ?(@!A*3 B\"% C D E F ( G 4 %\"H*! 5#6 2&$\"I$J KLM N 0\"O!6\"P!!!5QR\"S\"T)!$U)V\"W#X&Y\"Z[+ \\7']!+!%8\"^\"_#`\"a(b\"3'c1d#-\"e#!\"f gh!8#%i!$'#%, ( j 4 k\"l!m % n$o#p\"q!! r\"s t+,\"u#v\",\"w x\"y'7z!(! $ !\"{!!$!#%\"&\".!! / ! !)"),
    ("Pc", &[0, 1, 95, 8160, 20, 56799, 25, 2, 240], "\" #!$ %!&'( "),
    ("Pd", &[0, 5, 1, 45, 1373, 52, 3650, 1030, 2058, 3586, 3, 32, 29, 447, 20, 112, 52625, 38, 11, 170], "# $ % & ' (!) * +\"! , - . / 0\"1 2 3 "),
    ("Ps", &[0, 2, 4, 51, 32, 3, 40, 3775, 1887, 2431, 39, 56, 16, 635, 31, 1087, 81, 33, 405, 65, 34, 1062, 26, 19, 429, 52514, 216, 30, 18, 171], "& # $ ' ! ( ) \" * + , - ! . / ! ! ! ! ! ! 0 1 ! ! ! ! 2 ! ! ! ! ! ! ! ! ! ! 3 ! 4 5 ! ! ! 6 7 ! ! ! 8 ! ! ! ! \" ! ! ! % 9 : ; ! ! ! ! ! ! ! \" < ! ! = # $ \" % "),
    ("Pe", &[0, 2, 3, 52, 32, 4, 41, 3774, 1887, 2474, 56, 16, 635, 31, 1087, 81, 33, 405, 65, 34, 1062, 45, 429, 1, 52511, 218, 30, 18, 171], "& # $ ' ! ( ) * + , ! - . ! ! ! ! ! ! / 0 ! ! ! ! 1 ! ! ! ! ! ! ! ! ! ! 2 ! 3 4 ! ! ! 5 ! ! ! 6 ! ! ! ! % ! ! ! \"78 9 : ! ! ! ! ! ! ! % ; ! ! < # $ \" \" "),
    ("Pi", &[0, 3, 171, 8045, 1, 26, 3529, 2, 5, 16, 4], "\" # !$! % & ' ( ! ) * "),
    ("Pf", &[0, 4, 187, 8030, 29, 3529, 2, 5, 3, 16], "\" # ! $ % & ' ( ) ! "),
    ("Po", &[0, 2, 1, 3, 4, 5, 11, 8, 9, 6, 14, 7, 12, 28, 55, 21, 75, 13, 113, 125, 17, 33, 69, 15, 703, 467, 42, 45, 103, 44, 234, 32, 262, 141, 121, 122, 391, 368, 91, 169, 112, 172, 613, 774, 72, 158, 38, 314, 217, 129, 173, 29, 126, 60, 63, 65, 835, 10, 3227, 144, 429, 58, 190, 29699, 270, 100, 116, 381, 87, 41, 50, 48, 98, 127, 250, 21029, 23, 150, 37], "5!!!# ! !\"&\"$\"- 6 ) 7\"' 8 ( 9%: . # # ;\"/\"!\"* !!0#< =1>!.*? @\"& A B C D 1 E F &\"G*! 2 0$%\"H%I J'K 3!L\"M!!!N%!#O\"P\"Q)!%R)S\"T#U$V\"W+, X\"(+('###!$Y! !(Z#!\"2 [\"%!# #'!\"! #\"&$!(##! !,#!\\!] ^ _\"`!a & b%c#d\"e!! f\"g h,4\"3#i\"4\"j k)# l /\"##$!!#'!+ !\"m!!!# ! !\"&\"$\"- n #\""),
    ("S", &[0, 2, 1, 3, 5, 6, 14, 7, 11, 16, 9, 32, 31, 13, 28, 4, 15, 10, 12, 36, 17, 20, 8, 137, 198, 158, 33, 23, 45, 30, 104, 22, 29, 459, 118, 113, 140, 267, 119, 207, 248, 362, 246, 127, 131, 133, 208, 42, 194, 21, 134, 753, 724, 366, 357, 354, 1089, 70, 40, 64, 59, 375, 251, 26, 82, 77, 615, 48, 402, 62, 373, 230, 358, 47, 25, 88, 213, 27, 92, 244, 35, 38, 319, 6593, 63, 22161, 54, 570, 574, 226, 20414, 382, 128, 99, 155, 130], "3 ' 4!+ ! . ! 3/!\"# !## / , + A#--%%! !)B 0\"C D E!F!# #\"G ( 5\"H 6\"7 I\"'\"J K L'M N O 8 P!) !!#$Q ! ! R'!$!\"%#8\"S*T U V 9:W*16X !!2!&!&!&\"Y & Z!&!5+[\"!#!\"( !!%$! ! ! $ 2\"$/%#! \\\"$]$.#^_1`a;b<c#=(d;e$,#f#,!>g$h\"ij!k-lm(* &\"- ?\"'\"n\"o\"$*:p@=2@* ),(q)rstuvw?1\">\"9#(#x!y 0\"z 7){0| <#} !!# ~ ' 4!+ ! . ! \u{7f}%!%&\""),
    ("Sm", &[0, 2, 3, 5, 62, 32, 4, 7, 1, 17, 14, 40, 31, 257, 43, 46, 38, 767, 528, 6716, 140, 69, 6, 8, 267, 33, 91, 24, 41, 470, 10, 55, 112, 337, 30, 11, 15, 130, 23, 49, 20, 53213, 825, 165, 132], ". )!$ ! / # 0 % 1 2!3 * +!*!4 +&' 5&6(# \" \" 7 %(\" ! %89(: ,;<#= > ?'@ A&\"BCD-EF$#,\"-GH\"#I J !!K )!$ ! L '\""),
    ("Sc", &[0, 1, 499, 36, 126, 3, 1258, 124, 8, 246, 264, 582, 2460, 2245, 32, 34680, 21956, 109, 155, 220, 4], "# $%& ' \"!\"!( ) * + , -./ 0 1 2 3!4!"),
    ("Sk", &[0, 2, 1, 14, 13, 6, 16, 15, 94, 72, 7, 5, 4, 522, 3, 118, 1283, 5941, 12, 4253, 30308, 22, 10, 104, 977, 20551, 892, 163], "( ! ) * + , -.$$%%! !&/ '\"0 1 !!2!#!#!#\"3\"456\"7\"8 '\"9&: ! ; "),
    ("So", &[0, 2, 1, 3, 5, 7, 9, 11, 16, 6, 10, 30, 29, 128, 33, 8, 12, 15, 4, 26, 47, 22, 38, 31, 13, 14, 166, 978, 267, 207, 20, 248, 516, 374, 131, 133, 208, 42, 392, 21, 134, 198, 753, 724, 723, 158, 354, 1412, 59, 269, 19, 80, 39, 68, 82, 77, 23, 182, 53, 110, 247, 45, 43, 65, 255, 513, 104, 230, 358, 25, 88, 213, 27, 337, 35, 319, 6593, 63, 22161, 54, 866, 574, 21191, 46, 485], ": # $ ! ; <\"-\"= ' >\"? @ A B$! C D E F!( !!#$G ! ! H%!$!\")#I\"J&K L M.N&*/O\"!#!\"' !\"%$! ! ! $ 0\"1 !\"! P\"*2##!\"!\"!)!+#\"! !+Q%$R#)#S!,3T%U3*VWXY!/!Z&[!\\]^_`a45\"%6#7!bc$d\"4e!f8gh'& 9\"8 5\"%\"i\"$&.j,+0,& (7'6(klmnop#'\"! q!r1- s!t 2 $\"9\""),
    ("Z", &[0, 32, 128, 5600, 2432, 10, 30, 1, 6, 48, 4001], "! \" # $%&'( ) * "),
    ("Zs", &[0, 32, 128, 5600, 2432, 10, 37, 48, 4001], "! \" # $%& ' ( "),
    ("Zl", &[8232, 0], " !"),
    ("Zp", &[8233, 0], " !"),
    ("C", &[0, 1, 2, 3, 4, 5, 8, 6, 7, 11, 12, 14, 23, 13, 10, 9, 16, 27, 15, 32, 24, 25, 31, 34, 44, 56, 60, 50, 19, 37, 33, 90, 48, 61, 20, 21, 39, 28, 29, 17, 52, 30, 36, 87, 95, 71, 43, 117, 57, 127, 104, 96, 715, 398, 51, 193, 49, 102, 75, 162, 26, 18, 22, 59, 73, 40, 199, 378, 42, 58, 68, 670, 45, 63, 66, 78, 535, 54, 141, 664, 1813, 350, 46, 215, 65, 85, 29294, 349, 185, 204, 79, 11173, 8451, 367, 107, 126, 446, 55, 136, 191], " 6S3+ T!(#& \" C U D!V!$ 9(E#(0, W X!:!Y-:!;!0 F!\" *$3&Z [ /!#!, & \"\"%!.!#!%(\"## '!\\!$ (##!, & # # #!\" '##!$\"\"'% \"']/$ . $ , & # '!) $ $!\"+%!-'& $ /!#!, & # '!.!#!$'$## '!</# (\"$ %\"# \" #\"#\"$\"-#'\"$ %!\"%\"-^$+ $ 4 G!. $ %'# $!\"!%!)', $ 4 ) '!. $ %'#%# %!) #*+ $ H $ (#G!1 $ <\"5 . \"!&\"\"#( \" /%)!$)_#IJ# \" ' 5 \" 4!' \" (!)!%6` =#a = 0 +Jb \"$\"!c %!& \" %!d %!7 %!& \" %!0 e %!f!>\"1%K!(!g\"?',&5&C)+ $ #)L!)%)%2 *%?'8$M/3 -#-#\"\"N!'.h#1%*\"i!j I!*%)%2!3@k\"@ O(A\"0\"A'8!*(8$l!(!D!(!/ \" \" \" 3!m 0 2!( B!$ . *$1$;2#!E +\"7+7+n#o4*Bp!> q$r \"$\"!P'#-5&& & & & & & & & Q>1 ?)s5-#t K!R$8 L u)@ v\"9&w<x(y$# \" ',:\")%P(M(-%O.6\"z *#7 9&2!)!R,F/(!(!(&& & A#Q!)%{)4#;|}!~=&)'$1 ' \" # # \u{7f}2\u{80}!\u{81}'\"6N%H B %#' \u{82}#\u{83}\"(!(!(!$\"& &*#!"),
    ("Cc", &[0, 31, 96, 32], " !\"#"),
    ("Cf", &[0, 4, 50, 2, 173, 1363, 5, 23, 193, 385, 1, 81, 3884, 2045, 27, 9, 56976, 250], "$ %&' ( \" )*+ , -!.!\"!#/0 1#"),
    ("Co", &[57344, 6399], " !"),
    ("Cn", &[0, 1, 2, 3, 4, 5, 8, 6, 7, 11, 10, 13, 9, 23, 14, 12, 27, 16, 24, 25, 61, 32, 34, 44, 15, 56, 19, 31, 37, 33, 90, 48, 20, 21, 39, 28, 102, 60, 50, 29, 17, 52, 30, 36, 87, 95, 71, 43, 117, 57, 127, 104, 888, 398, 51, 271, 237, 26, 18, 22, 59, 73, 40, 199, 378, 42, 58, 68, 670, 45, 63, 66, 78, 535, 54, 141, 664, 1813, 350, 46, 215, 65, 85, 29294, 349, 185, 204, 79, 11173, 8815, 107, 126, 446, 55, 136, 191], "T!(#& \" A U B!V!$ 9(C#(*W 4!D+E!F!1 G!\" /$5 #%X ,!#!- & \"\"%!*!#!%(\"## '!Y!$ (##!- & # # #!\" '##!$\"\"'% \"'Z,$ * $ - & # '!) $ $!\".%!+'& $ ,!#!- & # '!*!#!$'$## '!:,# (\"$ %\"# \" #\"#\"$\"+#'\"$ %!\"%\"+[$. $ 2 H!* $ %'# $!\"!%!)'- $ 2 ) '!* $ %'#%# %!) #/. $ I $ (#H!0 $ :\"3 * \"!&\"\"#( \" ,%)!$)\\#JK# \" ' 3 \" 2!' \" (!)!%;] <#^ < 1 .K_ \"$\"!` %!& \" %!a %!6 %!& \" %!1 b %!c!=\"0%L!(!d\">'-&3&A). $ #)M!)%)%0%>'7$N,5 +#+#\"\"O!'*e#0%/\"f!g J!/%)%8!5?h\"? P(4\"1\"4'7!/(7$i!(!B!(!, \" \" \" 5!j 1 8!( @!$ * D +!C .\"6.6.k#l2/@m!= n$o \"$\"!Q'#+3&& & & & & & & & R=0 >)p3+#q L!S$7 M r)? s\"9&t:u(v$# \" '-E\")%Q(N(+%P*;\"w /#6 9&8!)!S-G,(!(!(&& & 4#R!)%x)2#F#y!z<&)'$0 ' \" # # {8|!}'\";O%I @ %#' ~!\" \u{7f}\"(!(!(!$\"& &,'!"),
    ("Cs", &[55296, 2047], " !"),
    ("Zh", &[0, 9, 23, 128, 5600, 2432, 10, 37, 48, 4001], "! \" # $ %&' ( ) "),
    ("Zv", &[10, 3, 120, 0, 8099, 1], " !\"#$%"),
    ("Word", &[2, 0, 3, 4, 5, 6, 1, 9, 7, 8, 10, 22, 15, 12, 14, 17, 25, 42, 11, 40, 21, 19, 13, 29, 18, 30, 37, 23, 32, 48, 46, 16, 24, 33, 26, 88, 31, 27, 49, 41, 59, 53, 35, 28, 116, 85, 51, 39, 52, 55, 65, 102, 79, 63, 457, 130, 82, 138, 165, 72, 98, 47, 332, 56, 66, 619, 74, 36, 69, 43, 38, 44, 94, 191, 277, 57, 727, 631, 1133, 228, 81, 470, 89, 93, 321, 6591, 22156, 68, 45, 268, 114, 11171, 8453, 365, 105, 107, 34, 362, 117, 134, 20], "=')0$! 0=!)& !#&   + 9 V$2,#)! !W# &\"\" !(!   ! 5 X Y'Z :\"!(3[B$\">1+'$& \\ !?&).\"!/! 79C-!,1*&$!%4$!*!#!@@)*%; $8GHI#!5!)'$' ,$(\"&\"4 % !#\"#!/!.&  $2\"$\"!'$$&\"4 % & & &<\" !)'\" /)   4 % & ##!5!?&$'*!-(\"&\"4 % & ##!D&  $' %-! $#  \"#& ! &#&# #2;!+-5(   + ,#!E \"!\"&$''% !$(   + ' ##!<& &$' &8)   3\"!/!%  '$8 $%/#; ) !\"%<'8] &6%*'3& ! # ; ! ' &*!\"# !*'\"\"A!<56( JK#L14*($$\"#!#&) $-6! '(: !%!\"1 ^ \"\"% ! \"\"3 \"\"< \"\"% ! \"\". _ \"\"`,5#,/M\"$#a\"? 0%b#*)/.8,/,-  ?Nc!$!#'(';'(C)#\"A !%d293O\"#-e$0(*f+*Pg'('.!h>8(#'17.QEJ7'#=\"))1\" 1\" $ &#!%iRj\"$\":\"$\"( ! ! ! 9\"P % !#  %#\"\"$$-%  %L&\"$%*(-S!$!\"' !##(! ! ! \" *\"\"%#$! klHT4m7no(\"#&*!\": !%!\"Q)!/+*% % % % % % % %p!q B))#\"#$M(  r \"%1 s#\"2DF,A'D( .A'3.tuRvwx\"y#E4>/9\"T3)\"S\"U%& ! #0,   \" +.$2N,F7'0$#! & :2+BK)>7*(# @ 3@  ($'(+#!#F !#&\"#\"! !0 \"*) 6$\"$\"$*% % 1 6(z.'({6+$=|}\"~O%6#%! ' - # ! & & \u{7f}\u{80}\u{81}5U\"IG2\u{82}# \u{83}\u{84}')0(0-C#$\"$\"$\" "),
    ("Identifier", &[2, 3, 0, 4, 5, 1, 6, 9, 8, 7, 12, 13, 15, 10, 11, 25, 17, 14, 18, 21, 22, 19, 16, 48, 23, 42, 30, 37, 40, 27, 32, 26, 53, 35, 39, 73, 50, 33, 85, 34, 88, 69, 28, 55, 38, 31, 63, 457, 116, 82, 138, 165, 44, 101, 59, 100, 203, 57, 24, 58, 77, 332, 56, 66, 619, 74, 83, 43, 62, 76, 115, 533, 52, 20, 2680, 228, 470, 89, 93, 49, 513, 6591, 65, 22156, 68, 45, 268, 47, 114, 102, 51, 64, 54, 72, 122, 11171, 8453, 365, 105, 107, 362, 41, 134], "\"(&+'\"*'(/$\" /$>!!$\"!\"(\"$\"&4 : O$.,#(\" \"2P %!! \")\"   \" 5 Q R #!S ;!\")<)\" T \" % % \"'?$!1$&\"$- \"#C$U ( ' 2!\"6V!W,@$\"!75=$-&8 $ %)X!' 2 )!%!3 & \"#!!(!%!!'\"$% #!+(% \"!  $$%!3 & % % %!\" #$%! #\"(! \"(,*  (   3 & % #!'    !\"6!!' \"(&   )!%!3 & % #!(!%! ( $% #!' \"0% $#  !#% \" %#%# #.$##  !!\")\",'-\")*   4 ,!(   !(%  !\"!!!'0! )   4 ' #!(   !(%)% !!' %1*   D   #&!(#!'.$   0#8 ( \"!&#\"$$ \" ))'!%1Y$, '<% \" # 8 \" 4!# \" $!'!!E\"Z%)'*\" \" \"$' A$5 0 A-\"[C)\\!; \"&\"!9 ] !!& \" !!< !!> !!& \" !!1 ^ !!_! E,0F!$#`!6 /&a#-(3-3*5+*   %+b#\"# !'G1)H(9&I.: .$..B!#*c$/)'B=$d J!-)'1\"'+ ,De#'2(+f+K''#7!((9! 0  L&g!$!;!$!) \" \" \" :!h & \"#  &#!!$$*&  &,#=#0%i\"*# ' \"1\"0*#>6*$\"#.2\"$\"!' \"##)\" \" \" ! -!!&#$\"2<jk)(+; \"&\"!K(\"68-& & & & & & & & M7\"l ?1 #!#$F!%!  m !&9 n2Mo,pqrstu!v#=3w$' xL(!y!N&% \" #/@$\"*\"(z+I.')8#\" 7!A+J#{,-): |-+!')4#}/ !,!#.$!$!$-& & 9 +)~ %!')\u{7f}+4$7\u{80}\u{81}!\u{82}B&+#&. * # \" % % \u{83}G\u{84}5N!@\u{85}*#,0,#%/ ?\")# \u{86}!\"$\"*'(/$\" /*H#$!$!$! #%#%5 "),
    ("IdentifierStart", &[2, 0, 3, 4, 1, 5, 6, 8, 7, 17, 12, 25, 22, 15, 11, 10, 9, 21, 42, 16, 18, 29, 40, 30, 13, 32, 23, 14, 19, 37, 26, 55, 36, 65, 88, 24, 41, 59, 31, 27, 35, 46, 49, 63, 53, 20, 33, 28, 66, 85, 51, 68, 43, 52, 457, 130, 82, 138, 165, 98, 47, 64, 116, 332, 56, 38, 619, 74, 69, 50, 83, 94, 191, 277, 67, 2680, 228, 81, 470, 89, 93, 513, 6591, 22156, 45, 268, 79, 102, 114, 11171, 48, 8453, 365, 105, 39, 107, 34, 362, 134], "@!5+%! +6\"%!.!%!&, 7 V%.-#'! !W# $\"\" !(!   ! < X Y0Z =\"!(6(!A>%\"+!12@$ [ !3$'$. \"!)! 57B*!+9/$%!#:%!/!#!CC'/&: %4DEL#!<!'03-%(\"$\"1 & !#\"#!)!;$  -\"'$0%%$\"1 & $ $ $9\" !M )'   1 & $ ##!<!3$3!'!*(\"$\"1 & $ ##!F$  3!4! %#  \"#$ ! $#$# #.:!D!*(   , -#!G \"!\"$F!%(   , 0 ##!9$ $3$4'   6\"!)!& 0 +%&)#: ' !\"&E\\ $*(E$ ! # : ! 0 $/!\"# !,\"N!]( HO#^21!)%%\"#!#$' %*8!4= !&!\"2 _ \"\"& ! \"\"6 \"\"9 \"\"& ! \"\"; ` \"\"Pa-)Q\"%#b\"3 +&c#/');4-)-*  3R@!#$SB'#\"N !&d.7e5\"#*T%+?,/Uf!gI4(?5;$.TGH2 .H\"''2\" 2\" % $#!&hAi\"%\"=\"%\"( ! ! ! 7\"U & !#  &#\"\"%%*&  &j$M!5!;!)*#9P!%!\"0 !##(! ! ! \" /\"\"&#%!46kl(\"#$8= !&!\"?'!),/& & & & & & & &m!n >''#\"#%Q(  o \"&2 p4FJ-qrAsSt\"u#-.$1I)7\"v6'\"w\"K&$ ! #+-   \" ,,!'R-JK%#! $*G.,>O'I5!)# 0.# 6C  (1,#!#J !#$\"#\"! !+ \"/' 8%\"%\"%/& & 2 8(x7y8,%z{|\"}~&8#&! 0 * # ! $ $ \u{7f}\u{80}\u{81}<K\"LD*?$+ >!(# \u{82}'!5+%! +*B#%\"%\"%\" #$#$"),
    ("IdentifierPart", &[2, 3, 0, 4, 5, 1, 6, 9, 8, 7, 12, 13, 15, 10, 11, 25, 17, 14, 18, 21, 22, 19, 16, 48, 23, 42, 30, 37, 40, 27, 32, 26, 53, 35, 39, 73, 50, 33, 85, 34, 88, 69, 28, 55, 38, 31, 63, 457, 116, 82, 138, 165, 44, 101, 59, 100, 203, 57, 24, 58, 77, 332, 56, 66, 619, 74, 83, 43, 62, 76, 115, 533, 52, 20, 2680, 228, 470, 89, 93, 49, 513, 6591, 65, 22156, 68, 45, 268, 47, 114, 102, 51, 64, 54, 72, 122, 11171, 8453, 365, 105, 107, 362, 41, 134], "\"(&+'\"*'(/$\" /$>!!$\"!\"(\"$\"&4 : O$.,#(\" \"2P %!! \")\"   \" 5 Q R #!S ;!\")<)\" T \" % % \"'?$!1$&\"$- \"#C$U ( ' 2!\"6V!W,@$\"!75=$-&8 $ %)X!' 2 )!%!3 & \"#!!(!%!!'\"$% #!+(% \"!  $$%!3 & % % %!\" #$%! #\"(! \"(,*  (   3 & % #!'    !\"6!!' \"(&   )!%!3 & % #!(!%! ( $% #!' \"0% $#  !#% \" %#%# #.$##  !!\")\",'-\")*   4 ,!(   !(%  !\"!!!'0! )   4 ' #!(   !(%)% !!' %1*   D   #&!(#!'.$   0#8 ( \"!&#\"$$ \" ))'!%1Y$, '<% \" # 8 \" 4!# \" $!'!!E\"Z%)'*\" \" \"$' A$5 0 A-\"[C)\\!; \"&\"!9 ] !!& \" !!< !!> !!& \" !!1 ^ !!_! E,0F!$#`!6 /&a#-(3-3*5+*   %+b#\"# !'G1)H(9&I.: .$..B!#*c$/)'B=$d J!-)'1\"'+ ,De#'2(+f+K''#7!((9! 0  L&g!$!;!$!) \" \" \" :!h & \"#  &#!!$$*&  &,#=#0%i\"*# ' \"1\"0*#>6*$\"#.2\"$\"!' \"##)\" \" \" ! -!!&#$\"2<jk)(+; \"&\"!K(\"68-& & & & & & & & M7\"l ?1 #!#$F!%!  m !&9 n2Mo,pqrstu!v#=3w$' xL(!y!N&% \" #/@$\"*\"(z+I.')8#\" 7!A+J#{,-): |-+!')4#}/ !,!#.$!$!$-& & 9 +)~ %!')\u{7f}+4$7\u{80}\u{81}!\u{82}B&+#&. * # \" % % \u{83}G\u{84}5N!@\u{85}*#,0,#%/ ?\")# \u{86}!\"$\"*'(/$\" /*H#$!$!$! #%#%5 "),
];

/// Code units with a distinct single-unit lower-case companion, ascending.
pub static CASE_UPPERS: &[u16] = &[
    65, 66, 67, 68, 69, 70, 71, 72, 73, 74, 75, 76,
    77, 78, 79, 80, 81, 82, 83, 84, 85, 86, 87, 88,
    89, 90, 192, 193, 194, 195, 196, 197, 198, 199, 200, 201,
    202, 203, 204, 205, 206, 207, 208, 209, 210, 211, 212, 213,
    214, 216, 217, 218, 219, 220, 221, 222, 256, 258, 260, 262,
    264, 266, 268, 270, 272, 274, 276, 278, 280, 282, 284, 286,
    288, 290, 292, 294, 296, 298, 300, 302, 306, 308, 310, 313,
    315, 317, 319, 321, 323, 325, 327, 330, 332, 334, 336, 338,
    340, 342, 344, 346, 348, 350, 352, 354, 356, 358, 360, 362,
    364, 366, 368, 370, 372, 374, 376, 377, 379, 381, 385, 386,
    388, 390, 391, 393, 394, 395, 398, 399, 400, 401, 403, 404,
    406, 407, 408, 412, 413, 415, 416, 418, 420, 422, 423, 425,
    428, 430, 431, 433, 434, 435, 437, 439, 440, 444, 452, 453,
    455, 456, 458, 459, 461, 463, 465, 467, 469, 471, 473, 475,
    478, 480, 482, 484, 486, 488, 490, 492, 494, 497, 498, 500,
    502, 503, 504, 506, 508, 510, 512, 514, 516, 518, 520, 522,
    524, 526, 528, 530, 532, 534, 536, 538, 540, 542, 544, 546,
    548, 550, 552, 554, 556, 558, 560, 562, 570, 571, 573, 574,
    577, 579, 580, 581, 582, 584, 586, 588, 590, 880, 882, 886,
    895, 902, 904, 905, 906, 908, 910, 911, 913, 914, 915, 916,
    917, 918, 919, 920, 921, 922, 923, 924, 925, 926, 927, 928,
    929, 931, 932, 933, 934, 935, 936, 937, 938, 939, 975, 984,
    986, 988, 990, 992, 994, 996, 998, 1000, 1002, 1004, 1006, 1012,
    1015, 1017, 1018, 1021, 1022, 1023, 1024, 1025, 1026, 1027, 1028, 1029,
    1030, 1031, 1032, 1033, 1034, 1035, 1036, 1037, 1038, 1039, 1040, 1041,
    1042, 1043, 1044, 1045, 1046, 1047, 1048, 1049, 1050, 1051, 1052, 1053,
    1054, 1055, 1056, 1057, 1058, 1059, 1060, 1061, 1062, 1063, 1064, 1065,
    1066, 1067, 1068, 1069, 1070, 1071, 1120, 1122, 1124, 1126, 1128, 1130,
    1132, 1134, 1136, 1138, 1140, 1142, 1144, 1146, 1148, 1150, 1152, 1162,
    1164, 1166, 1168, 1170, 1172, 1174, 1176, 1178, 1180, 1182, 1184, 1186,
    1188, 1190, 1192, 1194, 1196, 1198, 1200, 1202, 1204, 1206, 1208, 1210,
    1212, 1214, 1216, 1217, 1219, 1221, 1223, 1225, 1227, 1229, 1232, 1234,
    1236, 1238, 1240, 1242, 1244, 1246, 1248, 1250, 1252, 1254, 1256, 1258,
    1260, 1262, 1264, 1266, 1268, 1270, 1272, 1274, 1276, 1278, 1280, 1282,
    1284, 1286, 1288, 1290, 1292, 1294, 1296, 1298, 1300, 1302, 1304, 1306,
    1308, 1310, 1312, 1314, 1316, 1318, 1320, 1322, 1324, 1326, 1329, 1330,
    1331, 1332, 1333, 1334, 1335, 1336, 1337, 1338, 1339, 1340, 1341, 1342,
    1343, 1344, 1345, 1346, 1347, 1348, 1349, 1350, 1351, 1352, 1353, 1354,
    1355, 1356, 1357, 1358, 1359, 1360, 1361, 1362, 1363, 1364, 1365, 1366,
    4256, 4257, 4258, 4259, 4260, 4261, 4262, 4263, 4264, 4265, 4266, 4267,
    4268, 4269, 4270, 4271, 4272, 4273, 4274, 4275, 4276, 4277, 4278, 4279,
    4280, 4281, 4282, 4283, 4284, 4285, 4286, 4287, 4288, 4289, 4290, 4291,
    4292, 4293, 4295, 4301, 5024, 5025, 5026, 5027, 5028, 5029, 5030, 5031,
    5032, 5033, 5034, 5035, 5036, 5037, 5038, 5039, 5040, 5041, 5042, 5043,
    5044, 5045, 5046, 5047, 5048, 5049, 5050, 5051, 5052, 5053, 5054, 5055,
    5056, 5057, 5058, 5059, 5060, 5061, 5062, 5063, 5064, 5065, 5066, 5067,
    5068, 5069, 5070, 5071, 5072, 5073, 5074, 5075, 5076, 5077, 5078, 5079,
    5080, 5081, 5082, 5083, 5084, 5085, 5086, 5087, 5088, 5089, 5090, 5091,
    5092, 5093, 5094, 5095, 5096, 5097, 5098, 5099, 5100, 5101, 5102, 5103,
    5104, 5105, 5106, 5107, 5108, 5109, 7312, 7313, 7314, 7315, 7316, 7317,
    7318, 7319, 7320, 7321, 7322, 7323, 7324, 7325, 7326, 7327, 7328, 7329,
    7330, 7331, 7332, 7333, 7334, 7335, 7336, 7337, 7338, 7339, 7340, 7341,
    7342, 7343, 7344, 7345, 7346, 7347, 7348, 7349, 7350, 7351, 7352, 7353,
    7354, 7357, 7358, 7359, 7680, 7682, 7684, 7686, 7688, 7690, 7692, 7694,
    7696, 7698, 7700, 7702, 7704, 7706, 7708, 7710, 7712, 7714, 7716, 7718,
    7720, 7722, 7724, 7726, 7728, 7730, 7732, 7734, 7736, 7738, 7740, 7742,
    7744, 7746, 7748, 7750, 7752, 7754, 7756, 7758, 7760, 7762, 7764, 7766,
    7768, 7770, 7772, 7774, 7776, 7778, 7780, 7782, 7784, 7786, 7788, 7790,
    7792, 7794, 7796, 7798, 7800, 7802, 7804, 7806, 7808, 7810, 7812, 7814,
    7816, 7818, 7820, 7822, 7824, 7826, 7828, 7838, 7840, 7842, 7844, 7846,
    7848, 7850, 7852, 7854, 7856, 7858, 7860, 7862, 7864, 7866, 7868, 7870,
    7872, 7874, 7876, 7878, 7880, 7882, 7884, 7886, 7888, 7890, 7892, 7894,
    7896, 7898, 7900, 7902, 7904, 7906, 7908, 7910, 7912, 7914, 7916, 7918,
    7920, 7922, 7924, 7926, 7928, 7930, 7932, 7934, 7944, 7945, 7946, 7947,
    7948, 7949, 7950, 7951, 7960, 7961, 7962, 7963, 7964, 7965, 7976, 7977,
    7978, 7979, 7980, 7981, 7982, 7983, 7992, 7993, 7994, 7995, 7996, 7997,
    7998, 7999, 8008, 8009, 8010, 8011, 8012, 8013, 8025, 8027, 8029, 8031,
    8040, 8041, 8042, 8043, 8044, 8045, 8046, 8047, 8072, 8073, 8074, 8075,
    8076, 8077, 8078, 8079, 8088, 8089, 8090, 8091, 8092, 8093, 8094, 8095,
    8104, 8105, 8106, 8107, 8108, 8109, 8110, 8111, 8120, 8121, 8122, 8123,
    8124, 8136, 8137, 8138, 8139, 8140, 8152, 8153, 8154, 8155, 8168, 8169,
    8170, 8171, 8172, 8184, 8185, 8186, 8187, 8188, 8486, 8490, 8491, 8498,
    8544, 8545, 8546, 8547, 8548, 8549, 8550, 8551, 8552, 8553, 8554, 8555,
    8556, 8557, 8558, 8559, 8579, 9398, 9399, 9400, 9401, 9402, 9403, 9404,
    9405, 9406, 9407, 9408, 9409, 9410, 9411, 9412, 9413, 9414, 9415, 9416,
    9417, 9418, 9419, 9420, 9421, 9422, 9423, 11264, 11265, 11266, 11267, 11268,
    11269, 11270, 11271, 11272, 11273, 11274, 11275, 11276, 11277, 11278, 11279, 11280,
    11281, 11282, 11283, 11284, 11285, 11286, 11287, 11288, 11289, 11290, 11291, 11292,
    11293, 11294, 11295, 11296, 11297, 11298, 11299, 11300, 11301, 11302, 11303, 11304,
    11305, 11306, 11307, 11308, 11309, 11310, 11311, 11360, 11362, 11363, 11364, 11367,
    11369, 11371, 11373, 11374, 11375, 11376, 11378, 11381, 11390, 11391, 11392, 11394,
    11396, 11398, 11400, 11402, 11404, 11406, 11408, 11410, 11412, 11414, 11416, 11418,
    11420, 11422, 11424, 11426, 11428, 11430, 11432, 11434, 11436, 11438, 11440, 11442,
    11444, 11446, 11448, 11450, 11452, 11454, 11456, 11458, 11460, 11462, 11464, 11466,
    11468, 11470, 11472, 11474, 11476, 11478, 11480, 11482, 11484, 11486, 11488, 11490,
    11499, 11501, 11506, 42560, 42562, 42564, 42566, 42568, 42570, 42572, 42574, 42576,
    42578, 42580, 42582, 42584, 42586, 42588, 42590, 42592, 42594, 42596, 42598, 42600,
    42602, 42604, 42624, 42626, 42628, 42630, 42632, 42634, 42636, 42638, 42640, 42642,
    42644, 42646, 42648, 42650, 42786, 42788, 42790, 42792, 42794, 42796, 42798, 42802,
    42804, 42806, 42808, 42810, 42812, 42814, 42816, 42818, 42820, 42822, 42824, 42826,
    42828, 42830, 42832, 42834, 42836, 42838, 42840, 42842, 42844, 42846, 42848, 42850,
    42852, 42854, 42856, 42858, 42860, 42862, 42873, 42875, 42877, 42878, 42880, 42882,
    42884, 42886, 42891, 42893, 42896, 42898, 42902, 42904, 42906, 42908, 42910, 42912,
    42914, 42916, 42918, 42920, 42922, 42923, 42924, 42925, 42926, 42928, 42929, 42930,
    42931, 42932, 42934, 42936, 42938, 42940, 42942, 42944, 42946, 42948, 42949, 42950,
    42951, 42953, 42960, 42966, 42968, 42997, 65313, 65314, 65315, 65316, 65317, 65318,
    65319, 65320, 65321, 65322, 65323, 65324, 65325, 65326, 65327, 65328, 65329, 65330,
    65331, 65332, 65333, 65334, 65335, 65336, 65337, 65338,
];

/// Lower-case companions parallel to [`CASE_UPPERS`].
pub static CASE_LOWERS: &[u16] = &[
    97, 98, 99, 100, 101, 102, 103, 104, 105, 106, 107, 108,
    109, 110, 111, 112, 113, 114, 115, 116, 117, 118, 119, 120,
    121, 122, 224, 225, 226, 227, 228, 229, 230, 231, 232, 233,
    234, 235, 236, 237, 238, 239, 240, 241, 242, 243, 244, 245,
    246, 248, 249, 250, 251, 252, 253, 254, 257, 259, 261, 263,
    265, 267, 269, 271, 273, 275, 277, 279, 281, 283, 285, 287,
    289, 291, 293, 295, 297, 299, 301, 303, 307, 309, 311, 314,
    316, 318, 320, 322, 324, 326, 328, 331, 333, 335, 337, 339,
    341, 343, 345, 347, 349, 351, 353, 355, 357, 359, 361, 363,
    365, 367, 369, 371, 373, 375, 255, 378, 380, 382, 595, 387,
    389, 596, 392, 598, 599, 396, 477, 601, 603, 402, 608, 611,
    617, 616, 409, 623, 626, 629, 417, 419, 421, 640, 424, 643,
    429, 648, 432, 650, 651, 436, 438, 658, 441, 445, 454, 454,
    457, 457, 460, 460, 462, 464, 466, 468, 470, 472, 474, 476,
    479, 481, 483, 485, 487, 489, 491, 493, 495, 499, 499, 501,
    405, 447, 505, 507, 509, 511, 513, 515, 517, 519, 521, 523,
    525, 527, 529, 531, 533, 535, 537, 539, 541, 543, 414, 547,
    549, 551, 553, 555, 557, 559, 561, 563, 11365, 572, 410, 11366,
    578, 384, 649, 652, 583, 585, 587, 589, 591, 881, 883, 887,
    1011, 940, 941, 942, 943, 972, 973, 974, 945, 946, 947, 948,
    949, 950, 951, 952, 953, 954, 955, 956, 957, 958, 959, 960,
    961, 963, 964, 965, 966, 967, 968, 969, 970, 971, 983, 985,
    987, 989, 991, 993, 995, 997, 999, 1001, 1003, 1005, 1007, 952,
    1016, 1010, 1019, 891, 892, 893, 1104, 1105, 1106, 1107, 1108, 1109,
    1110, 1111, 1112, 1113, 1114, 1115, 1116, 1117, 1118, 1119, 1072, 1073,
    1074, 1075, 1076, 1077, 1078, 1079, 1080, 1081, 1082, 1083, 1084, 1085,
    1086, 1087, 1088, 1089, 1090, 1091, 1092, 1093, 1094, 1095, 1096, 1097,
    1098, 1099, 1100, 1101, 1102, 1103, 1121, 1123, 1125, 1127, 1129, 1131,
    1133, 1135, 1137, 1139, 1141, 1143, 1145, 1147, 1149, 1151, 1153, 1163,
    1165, 1167, 1169, 1171, 1173, 1175, 1177, 1179, 1181, 1183, 1185, 1187,
    1189, 1191, 1193, 1195, 1197, 1199, 1201, 1203, 1205, 1207, 1209, 1211,
    1213, 1215, 1231, 1218, 1220, 1222, 1224, 1226, 1228, 1230, 1233, 1235,
    1237, 1239, 1241, 1243, 1245, 1247, 1249, 1251, 1253, 1255, 1257, 1259,
    1261, 1263, 1265, 1267, 1269, 1271, 1273, 1275, 1277, 1279, 1281, 1283,
    1285, 1287, 1289, 1291, 1293, 1295, 1297, 1299, 1301, 1303, 1305, 1307,
    1309, 1311, 1313, 1315, 1317, 1319, 1321, 1323, 1325, 1327, 1377, 1378,
    1379, 1380, 1381, 1382, 1383, 1384, 1385, 1386, 1387, 1388, 1389, 1390,
    1391, 1392, 1393, 1394, 1395, 1396, 1397, 1398, 1399, 1400, 1401, 1402,
    1403, 1404, 1405, 1406, 1407, 1408, 1409, 1410, 1411, 1412, 1413, 1414,
    11520, 11521, 11522, 11523, 11524, 11525, 11526, 11527, 11528, 11529, 11530, 11531,
    11532, 11533, 11534, 11535, 11536, 11537, 11538, 11539, 11540, 11541, 11542, 11543,
    11544, 11545, 11546, 11547, 11548, 11549, 11550, 11551, 11552, 11553, 11554, 11555,
    11556, 11557, 11559, 11565, 43888, 43889, 43890, 43891, 43892, 43893, 43894, 43895,
    43896, 43897, 43898, 43899, 43900, 43901, 43902, 43903, 43904, 43905, 43906, 43907,
    43908, 43909, 43910, 43911, 43912, 43913, 43914, 43915, 43916, 43917, 43918, 43919,
    43920, 43921, 43922, 43923, 43924, 43925, 43926, 43927, 43928, 43929, 43930, 43931,
    43932, 43933, 43934, 43935, 43936, 43937, 43938, 43939, 43940, 43941, 43942, 43943,
    43944, 43945, 43946, 43947, 43948, 43949, 43950, 43951, 43952, 43953, 43954, 43955,
    43956, 43957, 43958, 43959, 43960, 43961, 43962, 43963, 43964, 43965, 43966, 43967,
    5112, 5113, 5114, 5115, 5116, 5117, 4304, 4305, 4306, 4307, 4308, 4309,
    4310, 4311, 4312, 4313, 4314, 4315, 4316, 4317, 4318, 4319, 4320, 4321,
    4322, 4323, 4324, 4325, 4326, 4327, 4328, 4329, 4330, 4331, 4332, 4333,
    4334, 4335, 4336, 4337, 4338, 4339, 4340, 4341, 4342, 4343, 4344, 4345,
    4346, 4349, 4350, 4351, 7681, 7683, 7685, 7687, 7689, 7691, 7693, 7695,
    7697, 7699, 7701, 7703, 7705, 7707, 7709, 7711, 7713, 7715, 7717, 7719,
    7721, 7723, 7725, 7727, 7729, 7731, 7733, 7735, 7737, 7739, 7741, 7743,
    7745, 7747, 7749, 7751, 7753, 7755, 7757, 7759, 7761, 7763, 7765, 7767,
    7769, 7771, 7773, 7775, 7777, 7779, 7781, 7783, 7785, 7787, 7789, 7791,
    7793, 7795, 7797, 7799, 7801, 7803, 7805, 7807, 7809, 7811, 7813, 7815,
    7817, 7819, 7821, 7823, 7825, 7827, 7829, 223, 7841, 7843, 7845, 7847,
    7849, 7851, 7853, 7855, 7857, 7859, 7861, 7863, 7865, 7867, 7869, 7871,
    7873, 7875, 7877, 7879, 7881, 7883, 7885, 7887, 7889, 7891, 7893, 7895,
    7897, 7899, 7901, 7903, 7905, 7907, 7909, 7911, 7913, 7915, 7917, 7919,
    7921, 7923, 7925, 7927, 7929, 7931, 7933, 7935, 7936, 7937, 7938, 7939,
    7940, 7941, 7942, 7943, 7952, 7953, 7954, 7955, 7956, 7957, 7968, 7969,
    7970, 7971, 7972, 7973, 7974, 7975, 7984, 7985, 7986, 7987, 7988, 7989,
    7990, 7991, 8000, 8001, 8002, 8003, 8004, 8005, 8017, 8019, 8021, 8023,
    8032, 8033, 8034, 8035, 8036, 8037, 8038, 8039, 8064, 8065, 8066, 8067,
    8068, 8069, 8070, 8071, 8080, 8081, 8082, 8083, 8084, 8085, 8086, 8087,
    8096, 8097, 8098, 8099, 8100, 8101, 8102, 8103, 8112, 8113, 8048, 8049,
    8115, 8050, 8051, 8052, 8053, 8131, 8144, 8145, 8054, 8055, 8160, 8161,
    8058, 8059, 8165, 8056, 8057, 8060, 8061, 8179, 969, 107, 229, 8526,
    8560, 8561, 8562, 8563, 8564, 8565, 8566, 8567, 8568, 8569, 8570, 8571,
    8572, 8573, 8574, 8575, 8580, 9424, 9425, 9426, 9427, 9428, 9429, 9430,
    9431, 9432, 9433, 9434, 9435, 9436, 9437, 9438, 9439, 9440, 9441, 9442,
    9443, 9444, 9445, 9446, 9447, 9448, 9449, 11312, 11313, 11314, 11315, 11316,
    11317, 11318, 11319, 11320, 11321, 11322, 11323, 11324, 11325, 11326, 11327, 11328,
    11329, 11330, 11331, 11332, 11333, 11334, 11335, 11336, 11337, 11338, 11339, 11340,
    11341, 11342, 11343, 11344, 11345, 11346, 11347, 11348, 11349, 11350, 11351, 11352,
    11353, 11354, 11355, 11356, 11357, 11358, 11359, 11361, 619, 7549, 637, 11368,
    11370, 11372, 593, 625, 592, 594, 11379, 11382, 575, 576, 11393, 11395,
    11397, 11399, 11401, 11403, 11405, 11407, 11409, 11411, 11413, 11415, 11417, 11419,
    11421, 11423, 11425, 11427, 11429, 11431, 11433, 11435, 11437, 11439, 11441, 11443,
    11445, 11447, 11449, 11451, 11453, 11455, 11457, 11459, 11461, 11463, 11465, 11467,
    11469, 11471, 11473, 11475, 11477, 11479, 11481, 11483, 11485, 11487, 11489, 11491,
    11500, 11502, 11507, 42561, 42563, 42565, 42567, 42569, 42571, 42573, 42575, 42577,
    42579, 42581, 42583, 42585, 42587, 42589, 42591, 42593, 42595, 42597, 42599, 42601,
    42603, 42605, 42625, 42627, 42629, 42631, 42633, 42635, 42637, 42639, 42641, 42643,
    42645, 42647, 42649, 42651, 42787, 42789, 42791, 42793, 42795, 42797, 42799, 42803,
    42805, 42807, 42809, 42811, 42813, 42815, 42817, 42819, 42821, 42823, 42825, 42827,
    42829, 42831, 42833, 42835, 42837, 42839, 42841, 42843, 42845, 42847, 42849, 42851,
    42853, 42855, 42857, 42859, 42861, 42863, 42874, 42876, 7545, 42879, 42881, 42883,
    42885, 42887, 42892, 613, 42897, 42899, 42903, 42905, 42907, 42909, 42911, 42913,
    42915, 42917, 42919, 42921, 614, 604, 609, 620, 618, 670, 647, 669,
    43859, 42933, 42935, 42937, 42939, 42941, 42943, 42945, 42947, 42900, 642, 7566,
    42952, 42954, 42961, 42967, 42969, 42998, 65345, 65346, 65347, 65348, 65349, 65350,
    65351, 65352, 65353, 65354, 65355, 65356, 65357, 65358, 65359, 65360, 65361, 65362,
    65363, 65364, 65365, 65366, 65367, 65368, 65369, 65370,
];

/// `(start, end, lower delta, upper delta)` quadruples covering every run
/// of code units that share the same wrapping case deltas, ascending by
/// start, with runs where both deltas are zero omitted.
pub static CASE_DELTAS: &[(u16, u16, u16, u16)] = &[
    (65, 90, 32, 0),
    (97, 122, 0, 65504),
    (181, 181, 0, 743),
    (192, 214, 32, 0),
    (216, 222, 32, 0),
    (224, 246, 0, 65504),
    (248, 254, 0, 65504),
    (255, 255, 0, 121),
    (256, 256, 1, 0),
    (257, 257, 0, 65535),
    (258, 258, 1, 0),
    (259, 259, 0, 65535),
    (260, 260, 1, 0),
    (261, 261, 0, 65535),
    (262, 262, 1, 0),
    (263, 263, 0, 65535),
    (264, 264, 1, 0),
    (265, 265, 0, 65535),
    (266, 266, 1, 0),
    (267, 267, 0, 65535),
    (268, 268, 1, 0),
    (269, 269, 0, 65535),
    (270, 270, 1, 0),
    (271, 271, 0, 65535),
    (272, 272, 1, 0),
    (273, 273, 0, 65535),
    (274, 274, 1, 0),
    (275, 275, 0, 65535),
    (276, 276, 1, 0),
    (277, 277, 0, 65535),
    (278, 278, 1, 0),
    (279, 279, 0, 65535),
    (280, 280, 1, 0),
    (281, 281, 0, 65535),
    (282, 282, 1, 0),
    (283, 283, 0, 65535),
    (284, 284, 1, 0),
    (285, 285, 0, 65535),
    (286, 286, 1, 0),
    (287, 287, 0, 65535),
    (288, 288, 1, 0),
    (289, 289, 0, 65535),
    (290, 290, 1, 0),
    (291, 291, 0, 65535),
    (292, 292, 1, 0),
    (293, 293, 0, 65535),
    (294, 294, 1, 0),
    (295, 295, 0, 65535),
    (296, 296, 1, 0),
    (297, 297, 0, 65535),
    (298, 298, 1, 0),
    (299, 299, 0, 65535),
    (300, 300, 1, 0),
    (301, 301, 0, 65535),
    (302, 302, 1, 0),
    (303, 303, 0, 65535),
    (305, 305, 0, 65304),
    (306, 306, 1, 0),
    (307, 307, 0, 65535),
    (308, 308, 1, 0),
    (309, 309, 0, 65535),
    (310, 310, 1, 0),
    (311, 311, 0, 65535),
    (313, 313, 1, 0),
    (314, 314, 0, 65535),
    (315, 315, 1, 0),
    (316, 316, 0, 65535),
    (317, 317, 1, 0),
    (318, 318, 0, 65535),
    (319, 319, 1, 0),
    (320, 320, 0, 65535),
    (321, 321, 1, 0),
    (322, 322, 0, 65535),
    (323, 323, 1, 0),
    (324, 324, 0, 65535),
    (325, 325, 1, 0),
    (326, 326, 0, 65535),
    (327, 327, 1, 0),
    (328, 328, 0, 65535),
    (330, 330, 1, 0),
    (331, 331, 0, 65535),
    (332, 332, 1, 0),
    (333, 333, 0, 65535),
    (334, 334, 1, 0),
    (335, 335, 0, 65535),
    (336, 336, 1, 0),
    (337, 337, 0, 65535),
    (338, 338, 1, 0),
    (339, 339, 0, 65535),
    (340, 340, 1, 0),
    (341, 341, 0, 65535),
    (342, 342, 1, 0),
    (343, 343, 0, 65535),
    (344, 344, 1, 0),
    (345, 345, 0, 65535),
    (346, 346, 1, 0),
    (347, 347, 0, 65535),
    (348, 348, 1, 0),
    (349, 349, 0, 65535),
    (350, 350, 1, 0),
    (351, 351, 0, 65535),
    (352, 352, 1, 0),
    (353, 353, 0, 65535),
    (354, 354, 1, 0),
    (355, 355, 0, 65535),
    (356, 356, 1, 0),
    (357, 357, 0, 65535),
    (358, 358, 1, 0),
    (359, 359, 0, 65535),
    (360, 360, 1, 0),
    (361, 361, 0, 65535),
    (362, 362, 1, 0),
    (363, 363, 0, 65535),
    (364, 364, 1, 0),
    (365, 365, 0, 65535),
    (366, 366, 1, 0),
    (367, 367, 0, 65535),
    (368, 368, 1, 0),
    (369, 369, 0, 65535),
    (370, 370, 1, 0),
    (371, 371, 0, 65535),
    (372, 372, 1, 0),
    (373, 373, 0, 65535),
    (374, 374, 1, 0),
    (375, 375, 0, 65535),
    (376, 376, 65415, 0),
    (377, 377, 1, 0),
    (378, 378, 0, 65535),
    (379, 379, 1, 0),
    (380, 380, 0, 65535),
    (381, 381, 1, 0),
    (382, 382, 0, 65535),
    (383, 383, 0, 65236),
    (384, 384, 0, 195),
    (385, 385, 210, 0),
    (386, 386, 1, 0),
    (387, 387, 0, 65535),
    (388, 388, 1, 0),
    (389, 389, 0, 65535),
    (390, 390, 206, 0),
    (391, 391, 1, 0),
    (392, 392, 0, 65535),
    (393, 394, 205, 0),
    (395, 395, 1, 0),
    (396, 396, 0, 65535),
    (398, 398, 79, 0),
    (399, 399, 202, 0),
    (400, 400, 203, 0),
    (401, 401, 1, 0),
    (402, 402, 0, 65535),
    (403, 403, 205, 0),
    (404, 404, 207, 0),
    (405, 405, 0, 97),
    (406, 406, 211, 0),
    (407, 407, 209, 0),
    (408, 408, 1, 0),
    (409, 409, 0, 65535),
    (410, 410, 0, 163),
    (412, 412, 211, 0),
    (413, 413, 213, 0),
    (414, 414, 0, 130),
    (415, 415, 214, 0),
    (416, 416, 1, 0),
    (417, 417, 0, 65535),
    (418, 418, 1, 0),
    (419, 419, 0, 65535),
    (420, 420, 1, 0),
    (421, 421, 0, 65535),
    (422, 422, 218, 0),
    (423, 423, 1, 0),
    (424, 424, 0, 65535),
    (425, 425, 218, 0),
    (428, 428, 1, 0),
    (429, 429, 0, 65535),
    (430, 430, 218, 0),
    (431, 431, 1, 0),
    (432, 432, 0, 65535),
    (433, 434, 217, 0),
    (435, 435, 1, 0),
    (436, 436, 0, 65535),
    (437, 437, 1, 0),
    (438, 438, 0, 65535),
    (439, 439, 219, 0),
    (440, 440, 1, 0),
    (441, 441, 0, 65535),
    (444, 444, 1, 0),
    (445, 445, 0, 65535),
    (447, 447, 0, 56),
    (452, 452, 2, 0),
    (453, 453, 1, 65535),
    (454, 454, 0, 65534),
    (455, 455, 2, 0),
    (456, 456, 1, 65535),
    (457, 457, 0, 65534),
    (458, 458, 2, 0),
    (459, 459, 1, 65535),
    (460, 460, 0, 65534),
    (461, 461, 1, 0),
    (462, 462, 0, 65535),
    (463, 463, 1, 0),
    (464, 464, 0, 65535),
    (465, 465, 1, 0),
    (466, 466, 0, 65535),
    (467, 467, 1, 0),
    (468, 468, 0, 65535),
    (469, 469, 1, 0),
    (470, 470, 0, 65535),
    (471, 471, 1, 0),
    (472, 472, 0, 65535),
    (473, 473, 1, 0),
    (474, 474, 0, 65535),
    (475, 475, 1, 0),
    (476, 476, 0, 65535),
    (477, 477, 0, 65457),
    (478, 478, 1, 0),
    (479, 479, 0, 65535),
    (480, 480, 1, 0),
    (481, 481, 0, 65535),
    (482, 482, 1, 0),
    (483, 483, 0, 65535),
    (484, 484, 1, 0),
    (485, 485, 0, 65535),
    (486, 486, 1, 0),
    (487, 487, 0, 65535),
    (488, 488, 1, 0),
    (489, 489, 0, 65535),
    (490, 490, 1, 0),
    (491, 491, 0, 65535),
    (492, 492, 1, 0),
    (493, 493, 0, 65535),
    (494, 494, 1, 0),
    (495, 495, 0, 65535),
    (497, 497, 2, 0),
    (498, 498, 1, 65535),
    (499, 499, 0, 65534),
    (500, 500, 1, 0),
    (501, 501, 0, 65535),
    (502, 502, 65439, 0),
    (503, 503, 65480, 0),
    (504, 504, 1, 0),
    (505, 505, 0, 65535),
    (506, 506, 1, 0),
    (507, 507, 0, 65535),
    (508, 508, 1, 0),
    (509, 509, 0, 65535),
    (510, 510, 1, 0),
    (511, 511, 0, 65535),
    (512, 512, 1, 0),
    (513, 513, 0, 65535),
    (514, 514, 1, 0),
    (515, 515, 0, 65535),
    (516, 516, 1, 0),
    (517, 517, 0, 65535),
    (518, 518, 1, 0),
    (519, 519, 0, 65535),
    (520, 520, 1, 0),
    (521, 521, 0, 65535),
    (522, 522, 1, 0),
    (523, 523, 0, 65535),
    (524, 524, 1, 0),
    (525, 525, 0, 65535),
    (526, 526, 1, 0),
    (527, 527, 0, 65535),
    (528, 528, 1, 0),
    (529, 529, 0, 65535),
    (530, 530, 1, 0),
    (531, 531, 0, 65535),
    (532, 532, 1, 0),
    (533, 533, 0, 65535),
    (534, 534, 1, 0),
    (535, 535, 0, 65535),
    (536, 536, 1, 0),
    (537, 537, 0, 65535),
    (538, 538, 1, 0),
    (539, 539, 0, 65535),
    (540, 540, 1, 0),
    (541, 541, 0, 65535),
    (542, 542, 1, 0),
    (543, 543, 0, 65535),
    (544, 544, 65406, 0),
    (546, 546, 1, 0),
    (547, 547, 0, 65535),
    (548, 548, 1, 0),
    (549, 549, 0, 65535),
    (550, 550, 1, 0),
    (551, 551, 0, 65535),
    (552, 552, 1, 0),
    (553, 553, 0, 65535),
    (554, 554, 1, 0),
    (555, 555, 0, 65535),
    (556, 556, 1, 0),
    (557, 557, 0, 65535),
    (558, 558, 1, 0),
    (559, 559, 0, 65535),
    (560, 560, 1, 0),
    (561, 561, 0, 65535),
    (562, 562, 1, 0),
    (563, 563, 0, 65535),
    (570, 570, 10795, 0),
    (571, 571, 1, 0),
    (572, 572, 0, 65535),
    (573, 573, 65373, 0),
    (574, 574, 10792, 0),
    (575, 576, 0, 10815),
    (577, 577, 1, 0),
    (578, 578, 0, 65535),
    (579, 579, 65341, 0),
    (580, 580, 69, 0),
    (581, 581, 71, 0),
    (582, 582, 1, 0),
    (583, 583, 0, 65535),
    (584, 584, 1, 0),
    (585, 585, 0, 65535),
    (586, 586, 1, 0),
    (587, 587, 0, 65535),
    (588, 588, 1, 0),
    (589, 589, 0, 65535),
    (590, 590, 1, 0),
    (591, 591, 0, 65535),
    (592, 592, 0, 10783),
    (593, 593, 0, 10780),
    (594, 594, 0, 10782),
    (595, 595, 0, 65326),
    (596, 596, 0, 65330),
    (598, 599, 0, 65331),
    (601, 601, 0, 65334),
    (603, 603, 0, 65333),
    (604, 604, 0, 42319),
    (608, 608, 0, 65331),
    (609, 609, 0, 42315),
    (611, 611, 0, 65329),
    (613, 613, 0, 42280),
    (614, 614, 0, 42308),
    (616, 616, 0, 65327),
    (617, 617, 0, 65325),
    (618, 618, 0, 42308),
    (619, 619, 0, 10743),
    (620, 620, 0, 42305),
    (623, 623, 0, 65325),
    (625, 625, 0, 10749),
    (626, 626, 0, 65323),
    (629, 629, 0, 65322),
    (637, 637, 0, 10727),
    (640, 640, 0, 65318),
    (642, 642, 0, 42307),
    (643, 643, 0, 65318),
    (647, 647, 0, 42282),
    (648, 648, 0, 65318),
    (649, 649, 0, 65467),
    (650, 651, 0, 65319),
    (652, 652, 0, 65465),
    (658, 658, 0, 65317),
    (669, 669, 0, 42261),
    (670, 670, 0, 42258),
    (837, 837, 0, 84),
    (880, 880, 1, 0),
    (881, 881, 0, 65535),
    (882, 882, 1, 0),
    (883, 883, 0, 65535),
    (886, 886, 1, 0),
    (887, 887, 0, 65535),
    (891, 893, 0, 130),
    (895, 895, 116, 0),
    (902, 902, 38, 0),
    (904, 906, 37, 0),
    (908, 908, 64, 0),
    (910, 911, 63, 0),
    (913, 929, 32, 0),
    (931, 939, 32, 0),
    (940, 940, 0, 65498),
    (941, 943, 0, 65499),
    (945, 961, 0, 65504),
    (962, 962, 0, 65505),
    (963, 971, 0, 65504),
    (972, 972, 0, 65472),
    (973, 974, 0, 65473),
    (975, 975, 8, 0),
    (976, 976, 0, 65474),
    (977, 977, 0, 65479),
    (981, 981, 0, 65489),
    (982, 982, 0, 65482),
    (983, 983, 0, 65528),
    (984, 984, 1, 0),
    (985, 985, 0, 65535),
    (986, 986, 1, 0),
    (987, 987, 0, 65535),
    (988, 988, 1, 0),
    (989, 989, 0, 65535),
    (990, 990, 1, 0),
    (991, 991, 0, 65535),
    (992, 992, 1, 0),
    (993, 993, 0, 65535),
    (994, 994, 1, 0),
    (995, 995, 0, 65535),
    (996, 996, 1, 0),
    (997, 997, 0, 65535),
    (998, 998, 1, 0),
    (999, 999, 0, 65535),
    (1000, 1000, 1, 0),
    (1001, 1001, 0, 65535),
    (1002, 1002, 1, 0),
    (1003, 1003, 0, 65535),
    (1004, 1004, 1, 0),
    (1005, 1005, 0, 65535),
    (1006, 1006, 1, 0),
    (1007, 1007, 0, 65535),
    (1008, 1008, 0, 65450),
    (1009, 1009, 0, 65456),
    (1010, 1010, 0, 7),
    (1011, 1011, 0, 65420),
    (1012, 1012, 65476, 0),
    (1013, 1013, 0, 65440),
    (1015, 1015, 1, 0),
    (1016, 1016, 0, 65535),
    (1017, 1017, 65529, 0),
    (1018, 1018, 1, 0),
    (1019, 1019, 0, 65535),
    (1021, 1023, 65406, 0),
    (1024, 1039, 80, 0),
    (1040, 1071, 32, 0),
    (1072, 1103, 0, 65504),
    (1104, 1119, 0, 65456),
    (1120, 1120, 1, 0),
    (1121, 1121, 0, 65535),
    (1122, 1122, 1, 0),
    (1123, 1123, 0, 65535),
    (1124, 1124, 1, 0),
    (1125, 1125, 0, 65535),
    (1126, 1126, 1, 0),
    (1127, 1127, 0, 65535),
    (1128, 1128, 1, 0),
    (1129, 1129, 0, 65535),
    (1130, 1130, 1, 0),
    (1131, 1131, 0, 65535),
    (1132, 1132, 1, 0),
    (1133, 1133, 0, 65535),
    (1134, 1134, 1, 0),
    (1135, 1135, 0, 65535),
    (1136, 1136, 1, 0),
    (1137, 1137, 0, 65535),
    (1138, 1138, 1, 0),
    (1139, 1139, 0, 65535),
    (1140, 1140, 1, 0),
    (1141, 1141, 0, 65535),
    (1142, 1142, 1, 0),
    (1143, 1143, 0, 65535),
    (1144, 1144, 1, 0),
    (1145, 1145, 0, 65535),
    (1146, 1146, 1, 0),
    (1147, 1147, 0, 65535),
    (1148, 1148, 1, 0),
    (1149, 1149, 0, 65535),
    (1150, 1150, 1, 0),
    (1151, 1151, 0, 65535),
    (1152, 1152, 1, 0),
    (1153, 1153, 0, 65535),
    (1162, 1162, 1, 0),
    (1163, 1163, 0, 65535),
    (1164, 1164, 1, 0),
    (1165, 1165, 0, 65535),
    (1166, 1166, 1, 0),
    (1167, 1167, 0, 65535),
    (1168, 1168, 1, 0),
    (1169, 1169, 0, 65535),
    (1170, 1170, 1, 0),
    (1171, 1171, 0, 65535),
    (1172, 1172, 1, 0),
    (1173, 1173, 0, 65535),
    (1174, 1174, 1, 0),
    (1175, 1175, 0, 65535),
    (1176, 1176, 1, 0),
    (1177, 1177, 0, 65535),
    (1178, 1178, 1, 0),
    (1179, 1179, 0, 65535),
    (1180, 1180, 1, 0),
    (1181, 1181, 0, 65535),
    (1182, 1182, 1, 0),
    (1183, 1183, 0, 65535),
    (1184, 1184, 1, 0),
    (1185, 1185, 0, 65535),
    (1186, 1186, 1, 0),
    (1187, 1187, 0, 65535),
    (1188, 1188, 1, 0),
    (1189, 1189, 0, 65535),
    (1190, 1190, 1, 0),
    (1191, 1191, 0, 65535),
    (1192, 1192, 1, 0),
    (1193, 1193, 0, 65535),
    (1194, 1194, 1, 0),
    (1195, 1195, 0, 65535),
    (1196, 1196, 1, 0),
    (1197, 1197, 0, 65535),
    (1198, 1198, 1, 0),
    (1199, 1199, 0, 65535),
    (1200, 1200, 1, 0),
    (1201, 1201, 0, 65535),
    (1202, 1202, 1, 0),
    (1203, 1203, 0, 65535),
    (1204, 1204, 1, 0),
    (1205, 1205, 0, 65535),
    (1206, 1206, 1, 0),
    (1207, 1207, 0, 65535),
    (1208, 1208, 1, 0),
    (1209, 1209, 0, 65535),
    (1210, 1210, 1, 0),
    (1211, 1211, 0, 65535),
    (1212, 1212, 1, 0),
    (1213, 1213, 0, 65535),
    (1214, 1214, 1, 0),
    (1215, 1215, 0, 65535),
    (1216, 1216, 15, 0),
    (1217, 1217, 1, 0),
    (1218, 1218, 0, 65535),
    (1219, 1219, 1, 0),
    (1220, 1220, 0, 65535),
    (1221, 1221, 1, 0),
    (1222, 1222, 0, 65535),
    (1223, 1223, 1, 0),
    (1224, 1224, 0, 65535),
    (1225, 1225, 1, 0),
    (1226, 1226, 0, 65535),
    (1227, 1227, 1, 0),
    (1228, 1228, 0, 65535),
    (1229, 1229, 1, 0),
    (1230, 1230, 0, 65535),
    (1231, 1231, 0, 65521),
    (1232, 1232, 1, 0),
    (1233, 1233, 0, 65535),
    (1234, 1234, 1, 0),
    (1235, 1235, 0, 65535),
    (1236, 1236, 1, 0),
    (1237, 1237, 0, 65535),
    (1238, 1238, 1, 0),
    (1239, 1239, 0, 65535),
    (1240, 1240, 1, 0),
    (1241, 1241, 0, 65535),
    (1242, 1242, 1, 0),
    (1243, 1243, 0, 65535),
    (1244, 1244, 1, 0),
    (1245, 1245, 0, 65535),
    (1246, 1246, 1, 0),
    (1247, 1247, 0, 65535),
    (1248, 1248, 1, 0),
    (1249, 1249, 0, 65535),
    (1250, 1250, 1, 0),
    (1251, 1251, 0, 65535),
    (1252, 1252, 1, 0),
    (1253, 1253, 0, 65535),
    (1254, 1254, 1, 0),
    (1255, 1255, 0, 65535),
    (1256, 1256, 1, 0),
    (1257, 1257, 0, 65535),
    (1258, 1258, 1, 0),
    (1259, 1259, 0, 65535),
    (1260, 1260, 1, 0),
    (1261, 1261, 0, 65535),
    (1262, 1262, 1, 0),
    (1263, 1263, 0, 65535),
    (1264, 1264, 1, 0),
    (1265, 1265, 0, 65535),
    (1266, 1266, 1, 0),
    (1267, 1267, 0, 65535),
    (1268, 1268, 1, 0),
    (1269, 1269, 0, 65535),
    (1270, 1270, 1, 0),
    (1271, 1271, 0, 65535),
    (1272, 1272, 1, 0),
    (1273, 1273, 0, 65535),
    (1274, 1274, 1, 0),
    (1275, 1275, 0, 65535),
    (1276, 1276, 1, 0),
    (1277, 1277, 0, 65535),
    (1278, 1278, 1, 0),
    (1279, 1279, 0, 65535),
    (1280, 1280, 1, 0),
    (1281, 1281, 0, 65535),
    (1282, 1282, 1, 0),
    (1283, 1283, 0, 65535),
    (1284, 1284, 1, 0),
    (1285, 1285, 0, 65535),
    (1286, 1286, 1, 0),
    (1287, 1287, 0, 65535),
    (1288, 1288, 1, 0),
    (1289, 1289, 0, 65535),
    (1290, 1290, 1, 0),
    (1291, 1291, 0, 65535),
    (1292, 1292, 1, 0),
    (1293, 1293, 0, 65535),
    (1294, 1294, 1, 0),
    (1295, 1295, 0, 65535),
    (1296, 1296, 1, 0),
    (1297, 1297, 0, 65535),
    (1298, 1298, 1, 0),
    (1299, 1299, 0, 65535),
    (1300, 1300, 1, 0),
    (1301, 1301, 0, 65535),
    (1302, 1302, 1, 0),
    (1303, 1303, 0, 65535),
    (1304, 1304, 1, 0),
    (1305, 1305, 0, 65535),
    (1306, 1306, 1, 0),
    (1307, 1307, 0, 65535),
    (1308, 1308, 1, 0),
    (1309, 1309, 0, 65535),
    (1310, 1310, 1, 0),
    (1311, 1311, 0, 65535),
    (1312, 1312, 1, 0),
    (1313, 1313, 0, 65535),
    (1314, 1314, 1, 0),
    (1315, 1315, 0, 65535),
    (1316, 1316, 1, 0),
    (1317, 1317, 0, 65535),
    (1318, 1318, 1, 0),
    (1319, 1319, 0, 65535),
    (1320, 1320, 1, 0),
    (1321, 1321, 0, 65535),
    (1322, 1322, 1, 0),
    (1323, 1323, 0, 65535),
    (1324, 1324, 1, 0),
    (1325, 1325, 0, 65535),
    (1326, 1326, 1, 0),
    (1327, 1327, 0, 65535),
    (1329, 1366, 48, 0),
    (1377, 1414, 0, 65488),
    (4256, 4293, 7264, 0),
    (4295, 4295, 7264, 0),
    (4301, 4301, 7264, 0),
    (4304, 4346, 0, 3008),
    (4349, 4351, 0, 3008),
    (5024, 5103, 38864, 0),
    (5104, 5109, 8, 0),
    (5112, 5117, 0, 65528),
    (7296, 7296, 0, 59282),
    (7297, 7297, 0, 59283),
    (7298, 7298, 0, 59292),
    (7299, 7300, 0, 59294),
    (7301, 7301, 0, 59293),
    (7302, 7302, 0, 59300),
    (7303, 7303, 0, 59355),
    (7304, 7304, 0, 35266),
    (7312, 7354, 62528, 0),
    (7357, 7359, 62528, 0),
    (7545, 7545, 0, 35332),
    (7549, 7549, 0, 3814),
    (7566, 7566, 0, 35384),
    (7680, 7680, 1, 0),
    (7681, 7681, 0, 65535),
    (7682, 7682, 1, 0),
    (7683, 7683, 0, 65535),
    (7684, 7684, 1, 0),
    (7685, 7685, 0, 65535),
    (7686, 7686, 1, 0),
    (7687, 7687, 0, 65535),
    (7688, 7688, 1, 0),
    (7689, 7689, 0, 65535),
    (7690, 7690, 1, 0),
    (7691, 7691, 0, 65535),
    (7692, 7692, 1, 0),
    (7693, 7693, 0, 65535),
    (7694, 7694, 1, 0),
    (7695, 7695, 0, 65535),
    (7696, 7696, 1, 0),
    (7697, 7697, 0, 65535),
    (7698, 7698, 1, 0),
    (7699, 7699, 0, 65535),
    (7700, 7700, 1, 0),
    (7701, 7701, 0, 65535),
    (7702, 7702, 1, 0),
    (7703, 7703, 0, 65535),
    (7704, 7704, 1, 0),
    (7705, 7705, 0, 65535),
    (7706, 7706, 1, 0),
    (7707, 7707, 0, 65535),
    (7708, 7708, 1, 0),
    (7709, 7709, 0, 65535),
    (7710, 7710, 1, 0),
    (7711, 7711, 0, 65535),
    (7712, 7712, 1, 0),
    (7713, 7713, 0, 65535),
    (7714, 7714, 1, 0),
    (7715, 7715, 0, 65535),
    (7716, 7716, 1, 0),
    (7717, 7717, 0, 65535),
    (7718, 7718, 1, 0),
    (7719, 7719, 0, 65535),
    (7720, 7720, 1, 0),
    (7721, 7721, 0, 65535),
    (7722, 7722, 1, 0),
    (7723, 7723, 0, 65535),
    (7724, 7724, 1, 0),
    (7725, 7725, 0, 65535),
    (7726, 7726, 1, 0),
    (7727, 7727, 0, 65535),
    (7728, 7728, 1, 0),
    (7729, 7729, 0, 65535),
    (7730, 7730, 1, 0),
    (7731, 7731, 0, 65535),
    (7732, 7732, 1, 0),
    (7733, 7733, 0, 65535),
    (7734, 7734, 1, 0),
    (7735, 7735, 0, 65535),
    (7736, 7736, 1, 0),
    (7737, 7737, 0, 65535),
    (7738, 7738, 1, 0),
    (7739, 7739, 0, 65535),
    (7740, 7740, 1, 0),
    (7741, 7741, 0, 65535),
    (7742, 7742, 1, 0),
    (7743, 7743, 0, 65535),
    (7744, 7744, 1, 0),
    (7745, 7745, 0, 65535),
    (7746, 7746, 1, 0),
    (7747, 7747, 0, 65535),
    (7748, 7748, 1, 0),
    (7749, 7749, 0, 65535),
    (7750, 7750, 1, 0),
    (7751, 7751, 0, 65535),
    (7752, 7752, 1, 0),
    (7753, 7753, 0, 65535),
    (7754, 7754, 1, 0),
    (7755, 7755, 0, 65535),
    (7756, 7756, 1, 0),
    (7757, 7757, 0, 65535),
    (7758, 7758, 1, 0),
    (7759, 7759, 0, 65535),
    (7760, 7760, 1, 0),
    (7761, 7761, 0, 65535),
    (7762, 7762, 1, 0),
    (7763, 7763, 0, 65535),
    (7764, 7764, 1, 0),
    (7765, 7765, 0, 65535),
    (7766, 7766, 1, 0),
    (7767, 7767, 0, 65535),
    (7768, 7768, 1, 0),
    (7769, 7769, 0, 65535),
    (7770, 7770, 1, 0),
    (7771, 7771, 0, 65535),
    (7772, 7772, 1, 0),
    (7773, 7773, 0, 65535),
    (7774, 7774, 1, 0),
    (7775, 7775, 0, 65535),
    (7776, 7776, 1, 0),
    (7777, 7777, 0, 65535),
    (7778, 7778, 1, 0),
    (7779, 7779, 0, 65535),
    (7780, 7780, 1, 0),
    (7781, 7781, 0, 65535),
    (7782, 7782, 1, 0),
    (7783, 7783, 0, 65535),
    (7784, 7784, 1, 0),
    (7785, 7785, 0, 65535),
    (7786, 7786, 1, 0),
    (7787, 7787, 0, 65535),
    (7788, 7788, 1, 0),
    (7789, 7789, 0, 65535),
    (7790, 7790, 1, 0),
    (7791, 7791, 0, 65535),
    (7792, 7792, 1, 0),
    (7793, 7793, 0, 65535),
    (7794, 7794, 1, 0),
    (7795, 7795, 0, 65535),
    (7796, 7796, 1, 0),
    (7797, 7797, 0, 65535),
    (7798, 7798, 1, 0),
    (7799, 7799, 0, 65535),
    (7800, 7800, 1, 0),
    (7801, 7801, 0, 65535),
    (7802, 7802, 1, 0),
    (7803, 7803, 0, 65535),
    (7804, 7804, 1, 0),
    (7805, 7805, 0, 65535),
    (7806, 7806, 1, 0),
    (7807, 7807, 0, 65535),
    (7808, 7808, 1, 0),
    (7809, 7809, 0, 65535),
    (7810, 7810, 1, 0),
    (7811, 7811, 0, 65535),
    (7812, 7812, 1, 0),
    (7813, 7813, 0, 65535),
    (7814, 7814, 1, 0),
    (7815, 7815, 0, 65535),
    (7816, 7816, 1, 0),
    (7817, 7817, 0, 65535),
    (7818, 7818, 1, 0),
    (7819, 7819, 0, 65535),
    (7820, 7820, 1, 0),
    (7821, 7821, 0, 65535),
    (7822, 7822, 1, 0),
    (7823, 7823, 0, 65535),
    (7824, 7824, 1, 0),
    (7825, 7825, 0, 65535),
    (7826, 7826, 1, 0),
    (7827, 7827, 0, 65535),
    (7828, 7828, 1, 0),
    (7829, 7829, 0, 65535),
    (7835, 7835, 0, 65477),
    (7838, 7838, 57921, 0),
    (7840, 7840, 1, 0),
    (7841, 7841, 0, 65535),
    (7842, 7842, 1, 0),
    (7843, 7843, 0, 65535),
    (7844, 7844, 1, 0),
    (7845, 7845, 0, 65535),
    (7846, 7846, 1, 0),
    (7847, 7847, 0, 65535),
    (7848, 7848, 1, 0),
    (7849, 7849, 0, 65535),
    (7850, 7850, 1, 0),
    (7851, 7851, 0, 65535),
    (7852, 7852, 1, 0),
    (7853, 7853, 0, 65535),
    (7854, 7854, 1, 0),
    (7855, 7855, 0, 65535),
    (7856, 7856, 1, 0),
    (7857, 7857, 0, 65535),
    (7858, 7858, 1, 0),
    (7859, 7859, 0, 65535),
    (7860, 7860, 1, 0),
    (7861, 7861, 0, 65535),
    (7862, 7862, 1, 0),
    (7863, 7863, 0, 65535),
    (7864, 7864, 1, 0),
    (7865, 7865, 0, 65535),
    (7866, 7866, 1, 0),
    (7867, 7867, 0, 65535),
    (7868, 7868, 1, 0),
    (7869, 7869, 0, 65535),
    (7870, 7870, 1, 0),
    (7871, 7871, 0, 65535),
    (7872, 7872, 1, 0),
    (7873, 7873, 0, 65535),
    (7874, 7874, 1, 0),
    (7875, 7875, 0, 65535),
    (7876, 7876, 1, 0),
    (7877, 7877, 0, 65535),
    (7878, 7878, 1, 0),
    (7879, 7879, 0, 65535),
    (7880, 7880, 1, 0),
    (7881, 7881, 0, 65535),
    (7882, 7882, 1, 0),
    (7883, 7883, 0, 65535),
    (7884, 7884, 1, 0),
    (7885, 7885, 0, 65535),
    (7886, 7886, 1, 0),
    (7887, 7887, 0, 65535),
    (7888, 7888, 1, 0),
    (7889, 7889, 0, 65535),
    (7890, 7890, 1, 0),
    (7891, 7891, 0, 65535),
    (7892, 7892, 1, 0),
    (7893, 7893, 0, 65535),
    (7894, 7894, 1, 0),
    (7895, 7895, 0, 65535),
    (7896, 7896, 1, 0),
    (7897, 7897, 0, 65535),
    (7898, 7898, 1, 0),
    (7899, 7899, 0, 65535),
    (7900, 7900, 1, 0),
    (7901, 7901, 0, 65535),
    (7902, 7902, 1, 0),
    (7903, 7903, 0, 65535),
    (7904, 7904, 1, 0),
    (7905, 7905, 0, 65535),
    (7906, 7906, 1, 0),
    (7907, 7907, 0, 65535),
    (7908, 7908, 1, 0),
    (7909, 7909, 0, 65535),
    (7910, 7910, 1, 0),
    (7911, 7911, 0, 65535),
    (7912, 7912, 1, 0),
    (7913, 7913, 0, 65535),
    (7914, 7914, 1, 0),
    (7915, 7915, 0, 65535),
    (7916, 7916, 1, 0),
    (7917, 7917, 0, 65535),
    (7918, 7918, 1, 0),
    (7919, 7919, 0, 65535),
    (7920, 7920, 1, 0),
    (7921, 7921, 0, 65535),
    (7922, 7922, 1, 0),
    (7923, 7923, 0, 65535),
    (7924, 7924, 1, 0),
    (7925, 7925, 0, 65535),
    (7926, 7926, 1, 0),
    (7927, 7927, 0, 65535),
    (7928, 7928, 1, 0),
    (7929, 7929, 0, 65535),
    (7930, 7930, 1, 0),
    (7931, 7931, 0, 65535),
    (7932, 7932, 1, 0),
    (7933, 7933, 0, 65535),
    (7934, 7934, 1, 0),
    (7935, 7935, 0, 65535),
    (7936, 7943, 0, 8),
    (7944, 7951, 65528, 0),
    (7952, 7957, 0, 8),
    (7960, 7965, 65528, 0),
    (7968, 7975, 0, 8),
    (7976, 7983, 65528, 0),
    (7984, 7991, 0, 8),
    (7992, 7999, 65528, 0),
    (8000, 8005, 0, 8),
    (8008, 8013, 65528, 0),
    (8017, 8017, 0, 8),
    (8019, 8019, 0, 8),
    (8021, 8021, 0, 8),
    (8023, 8023, 0, 8),
    (8025, 8025, 65528, 0),
    (8027, 8027, 65528, 0),
    (8029, 8029, 65528, 0),
    (8031, 8031, 65528, 0),
    (8032, 8039, 0, 8),
    (8040, 8047, 65528, 0),
    (8048, 8049, 0, 74),
    (8050, 8053, 0, 86),
    (8054, 8055, 0, 100),
    (8056, 8057, 0, 128),
    (8058, 8059, 0, 112),
    (8060, 8061, 0, 126),
    (8072, 8079, 65528, 0),
    (8088, 8095, 65528, 0),
    (8104, 8111, 65528, 0),
    (8112, 8113, 0, 8),
    (8120, 8121, 65528, 0),
    (8122, 8123, 65462, 0),
    (8124, 8124, 65527, 0),
    (8126, 8126, 0, 58331),
    (8136, 8139, 65450, 0),
    (8140, 8140, 65527, 0),
    (8144, 8145, 0, 8),
    (8152, 8153, 65528, 0),
    (8154, 8155, 65436, 0),
    (8160, 8161, 0, 8),
    (8165, 8165, 0, 7),
    (8168, 8169, 65528, 0),
    (8170, 8171, 65424, 0),
    (8172, 8172, 65529, 0),
    (8184, 8185, 65408, 0),
    (8186, 8187, 65410, 0),
    (8188, 8188, 65527, 0),
    (8486, 8486, 58019, 0),
    (8490, 8490, 57153, 0),
    (8491, 8491, 57274, 0),
    (8498, 8498, 28, 0),
    (8526, 8526, 0, 65508),
    (8544, 8559, 16, 0),
    (8560, 8575, 0, 65520),
    (8579, 8579, 1, 0),
    (8580, 8580, 0, 65535),
    (9398, 9423, 26, 0),
    (9424, 9449, 0, 65510),
    (11264, 11311, 48, 0),
    (11312, 11359, 0, 65488),
    (11360, 11360, 1, 0),
    (11361, 11361, 0, 65535),
    (11362, 11362, 54793, 0),
    (11363, 11363, 61722, 0),
    (11364, 11364, 54809, 0),
    (11365, 11365, 0, 54741),
    (11366, 11366, 0, 54744),
    (11367, 11367, 1, 0),
    (11368, 11368, 0, 65535),
    (11369, 11369, 1, 0),
    (11370, 11370, 0, 65535),
    (11371, 11371, 1, 0),
    (11372, 11372, 0, 65535),
    (11373, 11373, 54756, 0),
    (11374, 11374, 54787, 0),
    (11375, 11375, 54753, 0),
    (11376, 11376, 54754, 0),
    (11378, 11378, 1, 0),
    (11379, 11379, 0, 65535),
    (11381, 11381, 1, 0),
    (11382, 11382, 0, 65535),
    (11390, 11391, 54721, 0),
    (11392, 11392, 1, 0),
    (11393, 11393, 0, 65535),
    (11394, 11394, 1, 0),
    (11395, 11395, 0, 65535),
    (11396, 11396, 1, 0),
    (11397, 11397, 0, 65535),
    (11398, 11398, 1, 0),
    (11399, 11399, 0, 65535),
    (11400, 11400, 1, 0),
    (11401, 11401, 0, 65535),
    (11402, 11402, 1, 0),
    (11403, 11403, 0, 65535),
    (11404, 11404, 1, 0),
    (11405, 11405, 0, 65535),
    (11406, 11406, 1, 0),
    (11407, 11407, 0, 65535),
    (11408, 11408, 1, 0),
    (11409, 11409, 0, 65535),
    (11410, 11410, 1, 0),
    (11411, 11411, 0, 65535),
    (11412, 11412, 1, 0),
    (11413, 11413, 0, 65535),
    (11414, 11414, 1, 0),
    (11415, 11415, 0, 65535),
    (11416, 11416, 1, 0),
    (11417, 11417, 0, 65535),
    (11418, 11418, 1, 0),
    (11419, 11419, 0, 65535),
    (11420, 11420, 1, 0),
    (11421, 11421, 0, 65535),
    (11422, 11422, 1, 0),
    (11423, 11423, 0, 65535),
    (11424, 11424, 1, 0),
    (11425, 11425, 0, 65535),
    (11426, 11426, 1, 0),
    (11427, 11427, 0, 65535),
    (11428, 11428, 1, 0),
    (11429, 11429, 0, 65535),
    (11430, 11430, 1, 0),
    (11431, 11431, 0, 65535),
    (11432, 11432, 1, 0),
    (11433, 11433, 0, 65535),
    (11434, 11434, 1, 0),
    (11435, 11435, 0, 65535),
    (11436, 11436, 1, 0),
    (11437, 11437, 0, 65535),
    (11438, 11438, 1, 0),
    (11439, 11439, 0, 65535),
    (11440, 11440, 1, 0),
    (11441, 11441, 0, 65535),
    (11442, 11442, 1, 0),
    (11443, 11443, 0, 65535),
    (11444, 11444, 1, 0),
    (11445, 11445, 0, 65535),
    (11446, 11446, 1, 0),
    (11447, 11447, 0, 65535),
    (11448, 11448, 1, 0),
    (11449, 11449, 0, 65535),
    (11450, 11450, 1, 0),
    (11451, 11451, 0, 65535),
    (11452, 11452, 1, 0),
    (11453, 11453, 0, 65535),
    (11454, 11454, 1, 0),
    (11455, 11455, 0, 65535),
    (11456, 11456, 1, 0),
    (11457, 11457, 0, 65535),
    (11458, 11458, 1, 0),
    (11459, 11459, 0, 65535),
    (11460, 11460, 1, 0),
    (11461, 11461, 0, 65535),
    (11462, 11462, 1, 0),
    (11463, 11463, 0, 65535),
    (11464, 11464, 1, 0),
    (11465, 11465, 0, 65535),
    (11466, 11466, 1, 0),
    (11467, 11467, 0, 65535),
    (11468, 11468, 1, 0),
    (11469, 11469, 0, 65535),
    (11470, 11470, 1, 0),
    (11471, 11471, 0, 65535),
    (11472, 11472, 1, 0),
    (11473, 11473, 0, 65535),
    (11474, 11474, 1, 0),
    (11475, 11475, 0, 65535),
    (11476, 11476, 1, 0),
    (11477, 11477, 0, 65535),
    (11478, 11478, 1, 0),
    (11479, 11479, 0, 65535),
    (11480, 11480, 1, 0),
    (11481, 11481, 0, 65535),
    (11482, 11482, 1, 0),
    (11483, 11483, 0, 65535),
    (11484, 11484, 1, 0),
    (11485, 11485, 0, 65535),
    (11486, 11486, 1, 0),
    (11487, 11487, 0, 65535),
    (11488, 11488, 1, 0),
    (11489, 11489, 0, 65535),
    (11490, 11490, 1, 0),
    (11491, 11491, 0, 65535),
    (11499, 11499, 1, 0),
    (11500, 11500, 0, 65535),
    (11501, 11501, 1, 0),
    (11502, 11502, 0, 65535),
    (11506, 11506, 1, 0),
    (11507, 11507, 0, 65535),
    (11520, 11557, 0, 58272),
    (11559, 11559, 0, 58272),
    (11565, 11565, 0, 58272),
    (42560, 42560, 1, 0),
    (42561, 42561, 0, 65535),
    (42562, 42562, 1, 0),
    (42563, 42563, 0, 65535),
    (42564, 42564, 1, 0),
    (42565, 42565, 0, 65535),
    (42566, 42566, 1, 0),
    (42567, 42567, 0, 65535),
    (42568, 42568, 1, 0),
    (42569, 42569, 0, 65535),
    (42570, 42570, 1, 0),
    (42571, 42571, 0, 65535),
    (42572, 42572, 1, 0),
    (42573, 42573, 0, 65535),
    (42574, 42574, 1, 0),
    (42575, 42575, 0, 65535),
    (42576, 42576, 1, 0),
    (42577, 42577, 0, 65535),
    (42578, 42578, 1, 0),
    (42579, 42579, 0, 65535),
    (42580, 42580, 1, 0),
    (42581, 42581, 0, 65535),
    (42582, 42582, 1, 0),
    (42583, 42583, 0, 65535),
    (42584, 42584, 1, 0),
    (42585, 42585, 0, 65535),
    (42586, 42586, 1, 0),
    (42587, 42587, 0, 65535),
    (42588, 42588, 1, 0),
    (42589, 42589, 0, 65535),
    (42590, 42590, 1, 0),
    (42591, 42591, 0, 65535),
    (42592, 42592, 1, 0),
    (42593, 42593, 0, 65535),
    (42594, 42594, 1, 0),
    (42595, 42595, 0, 65535),
    (42596, 42596, 1, 0),
    (42597, 42597, 0, 65535),
    (42598, 42598, 1, 0),
    (42599, 42599, 0, 65535),
    (42600, 42600, 1, 0),
    (42601, 42601, 0, 65535),
    (42602, 42602, 1, 0),
    (42603, 42603, 0, 65535),
    (42604, 42604, 1, 0),
    (42605, 42605, 0, 65535),
    (42624, 42624, 1, 0),
    (42625, 42625, 0, 65535),
    (42626, 42626, 1, 0),
    (42627, 42627, 0, 65535),
    (42628, 42628, 1, 0),
    (42629, 42629, 0, 65535),
    (42630, 42630, 1, 0),
    (42631, 42631, 0, 65535),
    (42632, 42632, 1, 0),
    (42633, 42633, 0, 65535),
    (42634, 42634, 1, 0),
    (42635, 42635, 0, 65535),
    (42636, 42636, 1, 0),
    (42637, 42637, 0, 65535),
    (42638, 42638, 1, 0),
    (42639, 42639, 0, 65535),
    (42640, 42640, 1, 0),
    (42641, 42641, 0, 65535),
    (42642, 42642, 1, 0),
    (42643, 42643, 0, 65535),
    (42644, 42644, 1, 0),
    (42645, 42645, 0, 65535),
    (42646, 42646, 1, 0),
    (42647, 42647, 0, 65535),
    (42648, 42648, 1, 0),
    (42649, 42649, 0, 65535),
    (42650, 42650, 1, 0),
    (42651, 42651, 0, 65535),
    (42786, 42786, 1, 0),
    (42787, 42787, 0, 65535),
    (42788, 42788, 1, 0),
    (42789, 42789, 0, 65535),
    (42790, 42790, 1, 0),
    (42791, 42791, 0, 65535),
    (42792, 42792, 1, 0),
    (42793, 42793, 0, 65535),
    (42794, 42794, 1, 0),
    (42795, 42795, 0, 65535),
    (42796, 42796, 1, 0),
    (42797, 42797, 0, 65535),
    (42798, 42798, 1, 0),
    (42799, 42799, 0, 65535),
    (42802, 42802, 1, 0),
    (42803, 42803, 0, 65535),
    (42804, 42804, 1, 0),
    (42805, 42805, 0, 65535),
    (42806, 42806, 1, 0),
    (42807, 42807, 0, 65535),
    (42808, 42808, 1, 0),
    (42809, 42809, 0, 65535),
    (42810, 42810, 1, 0),
    (42811, 42811, 0, 65535),
    (42812, 42812, 1, 0),
    (42813, 42813, 0, 65535),
    (42814, 42814, 1, 0),
    (42815, 42815, 0, 65535),
    (42816, 42816, 1, 0),
    (42817, 42817, 0, 65535),
    (42818, 42818, 1, 0),
    (42819, 42819, 0, 65535),
    (42820, 42820, 1, 0),
    (42821, 42821, 0, 65535),
    (42822, 42822, 1, 0),
    (42823, 42823, 0, 65535),
    (42824, 42824, 1, 0),
    (42825, 42825, 0, 65535),
    (42826, 42826, 1, 0),
    (42827, 42827, 0, 65535),
    (42828, 42828, 1, 0),
    (42829, 42829, 0, 65535),
    (42830, 42830, 1, 0),
    (42831, 42831, 0, 65535),
    (42832, 42832, 1, 0),
    (42833, 42833, 0, 65535),
    (42834, 42834, 1, 0),
    (42835, 42835, 0, 65535),
    (42836, 42836, 1, 0),
    (42837, 42837, 0, 65535),
    (42838, 42838, 1, 0),
    (42839, 42839, 0, 65535),
    (42840, 42840, 1, 0),
    (42841, 42841, 0, 65535),
    (42842, 42842, 1, 0),
    (42843, 42843, 0, 65535),
    (42844, 42844, 1, 0),
    (42845, 42845, 0, 65535),
    (42846, 42846, 1, 0),
    (42847, 42847, 0, 65535),
    (42848, 42848, 1, 0),
    (42849, 42849, 0, 65535),
    (42850, 42850, 1, 0),
    (42851, 42851, 0, 65535),
    (42852, 42852, 1, 0),
    (42853, 42853, 0, 65535),
    (42854, 42854, 1, 0),
    (42855, 42855, 0, 65535),
    (42856, 42856, 1, 0),
    (42857, 42857, 0, 65535),
    (42858, 42858, 1, 0),
    (42859, 42859, 0, 65535),
    (42860, 42860, 1, 0),
    (42861, 42861, 0, 65535),
    (42862, 42862, 1, 0),
    (42863, 42863, 0, 65535),
    (42873, 42873, 1, 0),
    (42874, 42874, 0, 65535),
    (42875, 42875, 1, 0),
    (42876, 42876, 0, 65535),
    (42877, 42877, 30204, 0),
    (42878, 42878, 1, 0),
    (42879, 42879, 0, 65535),
    (42880, 42880, 1, 0),
    (42881, 42881, 0, 65535),
    (42882, 42882, 1, 0),
    (42883, 42883, 0, 65535),
    (42884, 42884, 1, 0),
    (42885, 42885, 0, 65535),
    (42886, 42886, 1, 0),
    (42887, 42887, 0, 65535),
    (42891, 42891, 1, 0),
    (42892, 42892, 0, 65535),
    (42893, 42893, 23256, 0),
    (42896, 42896, 1, 0),
    (42897, 42897, 0, 65535),
    (42898, 42898, 1, 0),
    (42899, 42899, 0, 65535),
    (42900, 42900, 0, 48),
    (42902, 42902, 1, 0),
    (42903, 42903, 0, 65535),
    (42904, 42904, 1, 0),
    (42905, 42905, 0, 65535),
    (42906, 42906, 1, 0),
    (42907, 42907, 0, 65535),
    (42908, 42908, 1, 0),
    (42909, 42909, 0, 65535),
    (42910, 42910, 1, 0),
    (42911, 42911, 0, 65535),
    (42912, 42912, 1, 0),
    (42913, 42913, 0, 65535),
    (42914, 42914, 1, 0),
    (42915, 42915, 0, 65535),
    (42916, 42916, 1, 0),
    (42917, 42917, 0, 65535),
    (42918, 42918, 1, 0),
    (42919, 42919, 0, 65535),
    (42920, 42920, 1, 0),
    (42921, 42921, 0, 65535),
    (42922, 42922, 23228, 0),
    (42923, 42923, 23217, 0),
    (42924, 42924, 23221, 0),
    (42925, 42925, 23231, 0),
    (42926, 42926, 23228, 0),
    (42928, 42928, 23278, 0),
    (42929, 42929, 23254, 0),
    (42930, 42930, 23275, 0),
    (42931, 42931, 928, 0),
    (42932, 42932, 1, 0),
    (42933, 42933, 0, 65535),
    (42934, 42934, 1, 0),
    (42935, 42935, 0, 65535),
    (42936, 42936, 1, 0),
    (42937, 42937, 0, 65535),
    (42938, 42938, 1, 0),
    (42939, 42939, 0, 65535),
    (42940, 42940, 1, 0),
    (42941, 42941, 0, 65535),
    (42942, 42942, 1, 0),
    (42943, 42943, 0, 65535),
    (42944, 42944, 1, 0),
    (42945, 42945, 0, 65535),
    (42946, 42946, 1, 0),
    (42947, 42947, 0, 65535),
    (42948, 42948, 65488, 0),
    (42949, 42949, 23229, 0),
    (42950, 42950, 30152, 0),
    (42951, 42951, 1, 0),
    (42952, 42952, 0, 65535),
    (42953, 42953, 1, 0),
    (42954, 42954, 0, 65535),
    (42960, 42960, 1, 0),
    (42961, 42961, 0, 65535),
    (42966, 42966, 1, 0),
    (42967, 42967, 0, 65535),
    (42968, 42968, 1, 0),
    (42969, 42969, 0, 65535),
    (42997, 42997, 1, 0),
    (42998, 42998, 0, 65535),
    (43859, 43859, 0, 64608),
    (43888, 43967, 0, 26672),
    (65313, 65338, 32, 0),
    (65345, 65370, 0, 65504),
];
